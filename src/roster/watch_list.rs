//! Shrinking set of team names still waiting to be collected

/// Team names whose players have not been collected yet.
///
/// Doubles as the termination signal of a poll: once empty, every watched
/// team has been seen. Removal swaps the last name into the freed slot, so
/// the order of the remaining names is not stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatchList {
    teams: Vec<String>,
}

impl WatchList {
    /// Builds a watch-list, keeping only the first occurrence of each name.
    pub fn new<I, S>(teams: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for team in teams {
            let team = team.into();
            if !unique.contains(&team) {
                unique.push(team);
            }
        }
        Self { teams: unique }
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn contains(&self, team: &str) -> bool {
        self.teams.iter().any(|t| t == team)
    }

    /// Remaining team names in their current (swap-affected) order.
    pub fn teams(&self) -> &[String] {
        &self.teams
    }

    /// Removes `team` if it is still pending. Returns whether it was.
    pub fn take(&mut self, team: &str) -> bool {
        find_and_remove(&mut self.teams, team)
    }
}

/// Linear search for `word`; removes the first match with [`remove_element`].
pub fn find_and_remove(list: &mut Vec<String>, word: &str) -> bool {
    match list.iter().position(|w| w == word) {
        Some(index) => {
            remove_element(list, index);
            true
        }
        None => false,
    }
}

/// Removes the element at `index` by swapping the last element into its place.
///
/// # Panics
/// Panics if `index` is out of bounds.
pub fn remove_element(list: &mut Vec<String>, index: usize) -> String {
    list.swap_remove(index)
}
