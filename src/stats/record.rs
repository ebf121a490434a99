// src/stats/record.rs
//
// One played match for one player. The counter set is fixed: every key is
// always present (defaulted to 0), so downstream code never deals with
// "maybe missing" stats.

/// The recognized per-match counters, in canonical order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatKey {
    Kicks,
    Handballs,
    Marks,
    Goals,
    Behinds,
    Tackles,
    Spoils,
    Smothers,
    Interceptions,
    FreesFor,
    FreesAgainst,
}

impl StatKey {
    pub const ALL: [StatKey; 11] = [
        StatKey::Kicks,
        StatKey::Handballs,
        StatKey::Marks,
        StatKey::Goals,
        StatKey::Behinds,
        StatKey::Tackles,
        StatKey::Spoils,
        StatKey::Smothers,
        StatKey::Interceptions,
        StatKey::FreesFor,
        StatKey::FreesAgainst,
    ];

    /// Stable text label, used as store column name and display heading.
    pub fn label(self) -> &'static str {
        match self {
            StatKey::Kicks => "kicks",
            StatKey::Handballs => "handballs",
            StatKey::Marks => "marks",
            StatKey::Goals => "goals",
            StatKey::Behinds => "behinds",
            StatKey::Tackles => "tackles",
            StatKey::Spoils => "spoils",
            StatKey::Smothers => "smothers",
            StatKey::Interceptions => "interceptions",
            StatKey::FreesFor => "freesFor",
            StatKey::FreesAgainst => "freesAgainst",
        }
    }

    pub fn from_label(label: &str) -> Option<StatKey> {
        StatKey::ALL.iter().copied().find(|k| k.label() == label)
    }
}

/// Per-match counter values. Default = all zeros.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatLine {
    pub kicks: u32,
    pub handballs: u32,
    pub marks: u32,
    pub goals: u32,
    pub behinds: u32,
    pub tackles: u32,
    pub spoils: u32,
    pub smothers: u32,
    pub interceptions: u32,
    pub frees_for: u32,
    pub frees_against: u32,
}

impl StatLine {
    pub fn get(&self, key: StatKey) -> u32 {
        match key {
            StatKey::Kicks => self.kicks,
            StatKey::Handballs => self.handballs,
            StatKey::Marks => self.marks,
            StatKey::Goals => self.goals,
            StatKey::Behinds => self.behinds,
            StatKey::Tackles => self.tackles,
            StatKey::Spoils => self.spoils,
            StatKey::Smothers => self.smothers,
            StatKey::Interceptions => self.interceptions,
            StatKey::FreesFor => self.frees_for,
            StatKey::FreesAgainst => self.frees_against,
        }
    }

    pub fn set(&mut self, key: StatKey, value: u32) {
        match key {
            StatKey::Kicks => self.kicks = value,
            StatKey::Handballs => self.handballs = value,
            StatKey::Marks => self.marks = value,
            StatKey::Goals => self.goals = value,
            StatKey::Behinds => self.behinds = value,
            StatKey::Tackles => self.tackles = value,
            StatKey::Spoils => self.spoils = value,
            StatKey::Smothers => self.smothers = value,
            StatKey::Interceptions => self.interceptions = value,
            StatKey::FreesFor => self.frees_for = value,
            StatKey::FreesAgainst => self.frees_against = value,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchRecord {
    /// Unique id, assigned by the store on creation.
    pub id: u32,
    /// Owning player.
    pub player_id: u32,
    /// Calendar date, ISO "YYYY-MM-DD". Lexicographic order = date order.
    pub date: String,
    /// Demonstration/test record; excluded from all real aggregation.
    pub synthetic: bool,
    pub stats: StatLine,
}

impl MatchRecord {
    /// Season = calendar year of the match date.
    /// None when the date does not start with a 4-digit year.
    pub fn season(&self) -> Option<i32> {
        let year = self.date.get(..4)?;
        if !year.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        year.parse().ok()
    }
}
