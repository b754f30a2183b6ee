use chrono::{Local, NaiveDate, NaiveDateTime};

/// An overridable local clock, so tests can pin "now".
#[derive(Clone, Debug, Default)]
pub struct Clock {
    fixed: Option<NaiveDateTime>,
}

impl Clock {
    pub fn fixed_at(at: NaiveDateTime) -> Clock {
        Clock { fixed: Some(at) }
    }

    pub fn now(&self) -> NaiveDateTime {
        match self.fixed {
            Some(fixed) => fixed,
            None => Local::now().naive_local(),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.now().date()
    }

    pub fn fix(&mut self, fixed: Option<NaiveDateTime>) {
        self.fixed = fixed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_stays_put() {
        let at = NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        let mut clock = Clock::fixed_at(at);
        assert_eq!(clock.now(), at);
        assert_eq!(clock.today(), at.date());

        clock.fix(None);
        assert!(clock.now() > at);
    }
}
