use media_metadata::TrackSummary;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Tracks keyed `title_0`, `title_1`, ... in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleMap(Vec<TrackSummary>);

impl TitleMap {
    pub fn push(&mut self, summary: TrackSummary) {
        self.0.push(summary);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn titles(&self) -> &[TrackSummary] {
        &self.0
    }
}

impl FromIterator<TrackSummary> for TitleMap {
    fn from_iter<I: IntoIterator<Item = TrackSummary>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for TitleMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (index, summary) in self.0.iter().enumerate() {
            map.serialize_entry(&format!("title_{index}"), summary)?;
        }
        map.end()
    }
}

/// Playlist name to its tracks, in playlist file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistMap(Vec<(String, TitleMap)>);

impl PlaylistMap {
    pub fn push(&mut self, name: String, titles: TitleMap) {
        self.0.push((name, titles));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&TitleMap> {
        self.0
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, titles)| titles)
    }
}

impl Serialize for PlaylistMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, titles) in &self.0 {
            map.serialize_entry(name, titles)?;
        }
        map.end()
    }
}
