use strum::EnumCount;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    strum::Display,
    strum::EnumCount,
    strum::EnumIter,
    strum::FromRepr,
)]
pub enum Tab {
    #[default]
    Dashboard,
    #[strum(serialize = "Live Map")]
    Map,
    Clients,
    Messages,
}

impl Tab {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Self {
        Self::from_repr((self.index() + 1) % Self::COUNT).unwrap_or_default()
    }

    pub fn previous(self) -> Self {
        Self::from_repr((self.index() + Self::COUNT - 1) % Self::COUNT).unwrap_or_default()
    }
}

/// Text field currently receiving keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ClientSearch,
    NearbyQuery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing(Field),
}

pub trait AppController {
    fn update(&mut self, action: super::tui::Action);
    fn render(&mut self, f: &mut ratatui::Frame);
    fn should_quit(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn tabs_cycle_both_ways() {
        let mut tab = Tab::Dashboard;
        for _ in 0..Tab::COUNT {
            tab = tab.next();
        }
        assert_eq!(tab, Tab::Dashboard);
        for _ in 0..Tab::COUNT {
            tab = tab.previous();
        }
        assert_eq!(tab, Tab::Dashboard);
        assert_eq!(Tab::Dashboard.previous(), Tab::Messages);
        assert_eq!(Tab::Map.next(), Tab::Clients);
    }

    #[test]
    fn tab_titles() {
        let titles: Vec<String> = Tab::iter().map(|t| t.to_string()).collect();
        assert_eq!(titles, ["Dashboard", "Live Map", "Clients", "Messages"]);
        assert_eq!(titles.len(), Tab::COUNT);
    }
}
