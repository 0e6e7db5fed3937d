//! Train/test split of one station's series.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Chronological train/test sequences cut at a timestamp.
///
/// `train` holds observations strictly before `cutoff`, `test` those
/// strictly after. An observation stamped exactly at the cutoff belongs to
/// neither and is counted in `dropped_at_cutoff`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Split {
    pub station: String,
    pub cutoff: NaiveDateTime,
    pub train: Vec<f64>,
    pub test: Vec<f64>,
    pub dropped_at_cutoff: usize,
}

impl Split {
    /// Both sides are non-empty, so a rolling forecast can run on it
    pub fn is_usable(&self) -> bool {
        !self.train.is_empty() && !self.test.is_empty()
    }

    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.train, self.test)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn split(train: Vec<f64>, test: Vec<f64>) -> Split {
        Split {
            station: "A".to_string(),
            cutoff: NaiveDate::from_ymd_opt(2021, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            train,
            test,
            dropped_at_cutoff: 0,
        }
    }

    #[test]
    fn test_is_usable() {
        assert!(split(vec![1.0], vec![2.0]).is_usable());
        assert!(!split(vec![], vec![2.0]).is_usable());
        assert!(!split(vec![1.0], vec![]).is_usable());
    }

    #[test]
    fn test_into_parts() {
        let (train, test) = split(vec![1.0, 2.0], vec![3.0]).into_parts();
        assert_eq!(train, vec![1.0, 2.0]);
        assert_eq!(test, vec![3.0]);
    }
}
