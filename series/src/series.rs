//! The round-indexed checkpoint series.

use crate::error::SeriesError;
use ckpt_types::Round;
use serde::{Deserialize, Deserializer, Serialize};

/// A value recorded at a specific round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint<V> {
    pub round: Round,
    pub value: V,
}

/// An append-only sequence of checkpoints, strictly increasing by round.
///
/// Writes only ever touch the tail: a write at the last recorded round
/// replaces that entry, a write at a later round appends. The backing
/// storage is a contiguous `Vec`, so lookups are a binary search over
/// entries that are sorted by construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OrderedCheckpointSeries<V> {
    checkpoints: Vec<Checkpoint<V>>,
}

impl<V> OrderedCheckpointSeries<V> {
    pub fn new() -> Self {
        Self {
            checkpoints: Vec::new(),
        }
    }

    /// Rebuild a series from an ordered list of checkpoints.
    ///
    /// Fails if rounds are not strictly increasing.
    pub fn from_checkpoints(checkpoints: Vec<Checkpoint<V>>) -> Result<Self, SeriesError> {
        for pair in checkpoints.windows(2) {
            if pair[1].round <= pair[0].round {
                return Err(SeriesError::OutOfOrderWrite {
                    last: pair[0].round,
                    attempted: pair[1].round,
                });
            }
        }
        Ok(Self { checkpoints })
    }

    /// Record `value` at `round`.
    ///
    /// Appends when the series is empty or `round` is past the last recorded
    /// round, overwrites the tail when `round` equals it, and rejects any
    /// earlier round.
    pub fn upsert(&mut self, round: Round, value: V) -> Result<(), SeriesError> {
        if let Some(last) = self.checkpoints.last_mut() {
            if round < last.round {
                return Err(SeriesError::OutOfOrderWrite {
                    last: last.round,
                    attempted: round,
                });
            }
            if round == last.round {
                last.value = value;
                return Ok(());
            }
        }
        self.checkpoints.push(Checkpoint { round, value });
        Ok(())
    }

    /// Whether at least one checkpoint exists.
    pub fn has_any(&self) -> bool {
        !self.checkpoints.is_empty()
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    pub fn first_round(&self) -> Option<Round> {
        self.checkpoints.first().map(|c| c.round)
    }

    pub fn last_round(&self) -> Option<Round> {
        self.checkpoints.last().map(|c| c.round)
    }

    /// Checkpoints in increasing round order.
    pub fn iter(&self) -> impl Iterator<Item = &Checkpoint<V>> {
        self.checkpoints.iter()
    }

    /// The checkpoint with the greatest round `<= round`.
    pub fn lower_bound_checkpoint(&self, round: Round) -> Result<&Checkpoint<V>, SeriesError> {
        let first = self.first_round().ok_or(SeriesError::EmptySeries)?;
        // Number of checkpoints at or before `round`.
        let idx = self.checkpoints.partition_point(|c| c.round <= round);
        if idx == 0 {
            return Err(SeriesError::BelowRangeLookup { round, first });
        }
        Ok(&self.checkpoints[idx - 1])
    }

    /// The value of the checkpoint with the greatest round `<= round`.
    pub fn lower_bound(&self, round: Round) -> Result<&V, SeriesError> {
        self.lower_bound_checkpoint(round).map(|c| &c.value)
    }
}

impl<V> Default for OrderedCheckpointSeries<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedCheckpointSeries<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let checkpoints = Vec::<Checkpoint<V>>::deserialize(deserializer)?;
        Self::from_checkpoints(checkpoints).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series_of(entries: &[(u64, u128)]) -> OrderedCheckpointSeries<u128> {
        let mut s = OrderedCheckpointSeries::new();
        for &(round, value) in entries {
            s.upsert(Round::new(round), value).unwrap();
        }
        s
    }

    #[test]
    fn new_series_is_empty() {
        let s: OrderedCheckpointSeries<u128> = OrderedCheckpointSeries::new();
        assert!(!s.has_any());
        assert!(s.is_empty());
        assert_eq!(s.first_round(), None);
        assert_eq!(s.last_round(), None);
        assert_eq!(s.lower_bound(Round::new(5)), Err(SeriesError::EmptySeries));
    }

    #[test]
    fn upsert_appends_later_rounds() {
        let s = series_of(&[(95, 500), (96, 1000), (99, 2500)]);
        assert!(s.has_any());
        assert_eq!(s.len(), 3);
        assert_eq!(s.first_round(), Some(Round::new(95)));
        assert_eq!(s.last_round(), Some(Round::new(99)));
    }

    #[test]
    fn upsert_same_round_overwrites() {
        let mut s = series_of(&[(100, 1000)]);
        s.upsert(Round::new(100), 2000).unwrap();
        assert_eq!(s.len(), 1);
        assert_eq!(s.lower_bound(Round::new(100)), Ok(&2000));
    }

    #[test]
    fn overwrite_then_append() {
        let mut s = series_of(&[(100, 1)]);
        s.upsert(Round::new(100), 2).unwrap();
        s.upsert(Round::new(101), 3).unwrap();
        let entries: Vec<_> = s.iter().map(|c| (c.round.as_u64(), c.value)).collect();
        assert_eq!(entries, vec![(100, 2), (101, 3)]);
    }

    #[test]
    fn upsert_earlier_round_rejected() {
        let mut s = series_of(&[(100, 1000)]);
        let err = s.upsert(Round::new(99), 5).unwrap_err();
        assert_eq!(
            err,
            SeriesError::OutOfOrderWrite {
                last: Round::new(100),
                attempted: Round::new(99)
            }
        );
        // Rejected write leaves the series untouched.
        assert_eq!(s.len(), 1);
        assert_eq!(s.lower_bound(Round::new(100)), Ok(&1000));
    }

    #[test]
    fn lower_bound_exact_and_between() {
        let s = series_of(&[(90, 1000), (95, 2000)]);
        assert_eq!(s.lower_bound(Round::new(90)), Ok(&1000));
        assert_eq!(s.lower_bound(Round::new(93)), Ok(&1000));
        assert_eq!(s.lower_bound(Round::new(95)), Ok(&2000));
        assert_eq!(s.lower_bound(Round::new(1_000)), Ok(&2000));
    }

    #[test]
    fn lower_bound_before_first_round() {
        let s = series_of(&[(100, 1000)]);
        assert_eq!(
            s.lower_bound(Round::new(98)),
            Err(SeriesError::BelowRangeLookup {
                round: Round::new(98),
                first: Round::new(100)
            })
        );
    }

    #[test]
    fn lower_bound_checkpoint_reports_round() {
        let s = series_of(&[(10, 1), (20, 2)]);
        let c = s.lower_bound_checkpoint(Round::new(25)).unwrap();
        assert_eq!(c.round, Round::new(20));
        assert_eq!(c.value, 2);
    }

    #[test]
    fn from_checkpoints_rejects_unordered() {
        let entries = vec![
            Checkpoint { round: Round::new(5), value: 1u128 },
            Checkpoint { round: Round::new(5), value: 2u128 },
        ];
        assert_eq!(
            OrderedCheckpointSeries::from_checkpoints(entries),
            Err(SeriesError::OutOfOrderWrite {
                last: Round::new(5),
                attempted: Round::new(5)
            })
        );
    }

    #[test]
    fn bincode_preserves_entries() {
        let s = series_of(&[(1, 10), (4, 40), (9, 90)]);
        let encoded = bincode::serialize(&s).unwrap();
        let decoded: OrderedCheckpointSeries<u128> = bincode::deserialize(&encoded).unwrap();
        assert_eq!(decoded, s);
    }

    #[test]
    fn json_deserialize_rejects_descending_rounds() {
        let json = r#"[{"round":9,"value":1},{"round":4,"value":2}]"#;
        let result: Result<OrderedCheckpointSeries<u128>, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
