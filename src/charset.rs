//! Canonical character groups and their per-character enabled state.

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const NUMBERS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?/";

/// Size of the largest canonical alphabet (symbols).
const MAX_GROUP_LEN: usize = 27;

/// One of the four canonical character groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterGroup {
    Uppercase,
    Lowercase,
    Number,
    Symbol,
}

impl CharacterGroup {
    /// All groups in alphabet assembly order.
    pub const ALL: [CharacterGroup; 4] = [
        CharacterGroup::Uppercase,
        CharacterGroup::Lowercase,
        CharacterGroup::Number,
        CharacterGroup::Symbol,
    ];

    /// The canonical alphabet of the group, in canonical order.
    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterGroup::Uppercase => UPPERCASE,
            CharacterGroup::Lowercase => LOWERCASE,
            CharacterGroup::Number => NUMBERS,
            CharacterGroup::Symbol => SYMBOLS,
        }
    }

    /// Number of characters in the canonical alphabet.
    pub fn size(self) -> usize {
        self.alphabet().len()
    }

    pub fn title(self) -> &'static str {
        match self {
            CharacterGroup::Uppercase => "Uppercase Letters",
            CharacterGroup::Lowercase => "Lowercase Letters",
            CharacterGroup::Number => "Numbers",
            CharacterGroup::Symbol => "Symbols",
        }
    }

    /// Returns the group owning `c`, if any.
    pub fn of(c: char) -> Option<CharacterGroup> {
        Self::ALL.into_iter().find(|g| g.position(c).is_some())
    }

    /// Position of `c` inside this group's canonical alphabet.
    pub fn position(self, c: char) -> Option<usize> {
        // All canonical alphabets are ASCII, so byte index == char index.
        self.alphabet().find(c)
    }

    pub(crate) fn index(self) -> usize {
        match self {
            CharacterGroup::Uppercase => 0,
            CharacterGroup::Lowercase => 1,
            CharacterGroup::Number => 2,
            CharacterGroup::Symbol => 3,
        }
    }
}

/// Enabled state of every character of one group.
///
/// Indexed by position in the canonical alphabet; slots past the group's
/// alphabet length are always `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPool {
    group: CharacterGroup,
    enabled: [bool; MAX_GROUP_LEN],
}

impl GroupPool {
    /// A pool with every canonical character enabled.
    pub fn new(group: CharacterGroup) -> Self {
        let mut pool = Self::empty(group);
        pool.set_all(true);
        pool
    }

    /// A pool with nothing enabled.
    pub fn empty(group: CharacterGroup) -> Self {
        Self {
            group,
            enabled: [false; MAX_GROUP_LEN],
        }
    }

    pub fn group(&self) -> CharacterGroup {
        self.group
    }

    /// Enables or disables a single character. Returns `false` when `c` is
    /// not part of this group's alphabet.
    pub fn set(&mut self, c: char, enabled: bool) -> bool {
        match self.group.position(c) {
            Some(idx) => {
                self.enabled[idx] = enabled;
                true
            }
            None => false,
        }
    }

    pub fn set_all(&mut self, enabled: bool) {
        for slot in self.enabled.iter_mut().take(self.group.size()) {
            *slot = enabled;
        }
    }

    pub fn is_enabled(&self, c: char) -> bool {
        self.group
            .position(c)
            .map(|idx| self.enabled[idx])
            .unwrap_or(false)
    }

    /// Enabled characters in canonical order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.group
            .alphabet()
            .chars()
            .zip(self.enabled.iter())
            .filter_map(|(c, &on)| on.then_some(c))
    }

    pub fn selected_count(&self) -> usize {
        self.enabled.iter().filter(|&&on| on).count()
    }

    pub fn is_empty(&self) -> bool {
        self.selected_count() == 0
    }
}

/// The four group pools, held in assembly order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPools([GroupPool; 4]);

impl CharacterPools {
    pub fn get(&self, group: CharacterGroup) -> &GroupPool {
        &self.0[group.index()]
    }

    pub fn get_mut(&mut self, group: CharacterGroup) -> &mut GroupPool {
        &mut self.0[group.index()]
    }

    /// Pools in assembly order (Upper, Lower, Number, Symbol).
    pub fn iter(&self) -> impl Iterator<Item = &GroupPool> {
        self.0.iter()
    }

    pub fn is_enabled(&self, c: char) -> bool {
        CharacterGroup::of(c)
            .map(|g| self.get(g).is_enabled(c))
            .unwrap_or(false)
    }
}

impl Default for CharacterPools {
    fn default() -> Self {
        Self(CharacterGroup::ALL.map(GroupPool::new))
    }
}
