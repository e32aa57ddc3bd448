use heapless::Vec;

use crate::error::ConfigError;

/// Number of distinct minutes in an hour, and so the longest valid schedule.
pub const MAX_UPDATE_TIMES: usize = 60;

/// Minutes within each hour at which the display refreshes.
///
/// Values are in `0..=59` and strictly ascending. An empty schedule means
/// the device relies on its sleep duration alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateSchedule {
    minutes: Vec<u8, MAX_UPDATE_TIMES>,
}

impl UpdateSchedule {
    pub fn new(minutes: &[u8]) -> Result<Self, ConfigError> {
        let mut validated: Vec<u8, MAX_UPDATE_TIMES> = Vec::new();
        for (index, &minute) in minutes.iter().enumerate() {
            if minute > 59 {
                return Err(ConfigError::MinuteOutOfRange { minute });
            }
            if validated.last().is_some_and(|&prev| minute <= prev) {
                return Err(ConfigError::ScheduleNotAscending { index });
            }
            // Strictly ascending values in 0..=59 cannot exceed the capacity.
            validated
                .push(minute)
                .map_err(|_| ConfigError::FieldTooLong("update_times"))?;
        }
        Ok(UpdateSchedule { minutes: validated })
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.minutes
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.minutes.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.minutes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.minutes.is_empty()
    }

    pub fn contains(&self, minute: u8) -> bool {
        self.minutes.binary_search(&minute).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ascending_minutes() {
        let schedule = UpdateSchedule::new(&[0, 15, 30, 45]).unwrap();
        assert_eq!(schedule.as_slice(), &[0, 15, 30, 45]);
        assert_eq!(schedule.len(), 4);
        assert!(schedule.contains(30));
        assert!(!schedule.contains(31));
    }

    #[test]
    fn empty_schedule_is_valid() {
        let schedule = UpdateSchedule::new(&[]).unwrap();
        assert!(schedule.is_empty());
        assert_eq!(schedule, UpdateSchedule::default());
    }

    #[test]
    fn every_minute_fits() {
        let all: std::vec::Vec<u8> = (0..60).collect();
        let schedule = UpdateSchedule::new(&all).unwrap();
        assert_eq!(schedule.len(), MAX_UPDATE_TIMES);
        assert_eq!(schedule.iter().last(), Some(59));
    }

    #[test]
    fn rejects_minute_sixty() {
        assert!(matches!(
            UpdateSchedule::new(&[10, 60]),
            Err(ConfigError::MinuteOutOfRange { minute: 60 })
        ));
    }

    #[test]
    fn rejects_duplicates_and_descending_values() {
        assert!(matches!(
            UpdateSchedule::new(&[5, 5]),
            Err(ConfigError::ScheduleNotAscending { index: 1 })
        ));
        assert!(matches!(
            UpdateSchedule::new(&[0, 30, 20]),
            Err(ConfigError::ScheduleNotAscending { index: 2 })
        ));
    }
}
