use std::collections::{HashMap, VecDeque};

use log::{debug, info};

use crate::observation::MoodObservation;

/// Session-scoped mood log. Newest entry first, unbounded, never deduplicated.
#[derive(Debug, Clone, Default)]
pub struct SessionHistory {
    entries: VecDeque<MoodObservation>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, obs: MoodObservation) {
        info!(
            "[history] recorded mood={} source={} conf={:.2}",
            obs.mood(),
            obs.source().as_str(),
            obs.confidence()
        );
        self.entries.push_front(obs);
    }

    pub fn latest(&self) -> Option<&MoodObservation> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = &MoodObservation> {
        self.entries.iter()
    }

    pub fn to_vec(&self) -> Vec<MoodObservation> {
        self.entries.iter().cloned().collect()
    }

    pub fn clear(&mut self) {
        debug!("[history] cleared {} entries", self.entries.len());
        self.entries.clear();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup {
    pub key: String,
    pub entries: Vec<MoodObservation>,
}

/// Buckets observations by calendar day. Bucket order follows the first time
/// each day appears; entries keep their input order.
pub fn group_by_day<'a, I>(observations: I) -> Vec<DayGroup>
where
    I: IntoIterator<Item = &'a MoodObservation>,
{
    let mut groups: Vec<DayGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for obs in observations {
        let key = obs.day_key();
        match index.get(&key) {
            Some(&i) => groups[i].entries.push(obs.clone()),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(DayGroup {
                    key,
                    entries: vec![obs.clone()],
                });
            }
        }
    }

    groups
}
