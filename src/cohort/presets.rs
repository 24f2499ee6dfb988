use crate::error::{Result, SonglabError};

/// Named, fixed list of songs used to seed a history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cohort {
    pub name: String,
    pub songs: Vec<String>,
}

impl Cohort {
    pub fn new<S: Into<String>>(name: impl Into<String>, songs: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.into(),
            songs: songs.into_iter().map(Into::into).collect(),
        }
    }
}

pub const COHORT_A: &str = "Cohort A";
pub const COHORT_B: &str = "Cohort B";

const COHORT_A_SONGS: &[&str] = &[
    "For my Hand",
    "Abracadabra",
    "Freefall",
    "Freedom Time",
    "Belong to the World",
    "The Line",
    "Inochi No Tabekata",
    "Tadow",
    "Niagra Falls",
    "Diamonds",
    "Kalidoscope",
    "Only in my Dreams",
    "My Favorite Things",
    "Left Behind",
    "Prove",
];

const COHORT_B_SONGS: &[&str] = &[
    "Blue Bayou",
    "Misty",
    "Make Yours a Happy Home",
    "I'm Gonna Be",
    "Frederick",
    "Wake Up",
    "i am enough",
    "Dancer",
    "Promises (feat. Joe L Barnes)",
    "Do 4 Love",
    "Promises",
    "Valentina",
    "Honey",
    "The First Time Ever I Saw Your Face",
];

/// Ordered set of cohort presets
#[derive(Debug, Clone)]
pub struct CohortPresets {
    cohorts: Vec<Cohort>,
}

impl CohortPresets {
    pub fn new(cohorts: Vec<Cohort>) -> Self {
        Self { cohorts }
    }

    /// The two presets shipped with the demo
    pub fn builtin() -> Self {
        Self::new(vec![
            Cohort::new(COHORT_A, COHORT_A_SONGS.iter().copied()),
            Cohort::new(COHORT_B, COHORT_B_SONGS.iter().copied()),
        ])
    }

    pub fn get(&self, name: &str) -> Option<&Cohort> {
        self.cohorts.iter().find(|c| c.name == name)
    }

    /// Look up several cohorts, keeping the requested order
    pub fn resolve<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<&Cohort>> {
        names
            .iter()
            .map(|n| {
                let n = n.as_ref();
                self.get(n)
                    .ok_or_else(|| SonglabError::UnknownCohort(n.to_string()))
            })
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cohorts.iter().map(|c| c.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cohort> {
        self.cohorts.iter()
    }

    pub fn len(&self) -> usize {
        self.cohorts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cohorts.is_empty()
    }
}

impl Default for CohortPresets {
    fn default() -> Self {
        Self::builtin()
    }
}
