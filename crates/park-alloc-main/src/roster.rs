// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Operator roster: the set of names allowed to run administrative
//! commands plus the shared security code. Name checks are case
//! insensitive.

const DEFAULT_SECURITY_CODE: u32 = 18041;

#[derive(Debug, Clone)]
pub struct Roster {
    managers: Vec<String>,
    security_code: u32,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            managers: vec!["alice".into(), "bob".into(), "charlie".into()],
            security_code: DEFAULT_SECURITY_CODE,
        }
    }
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn managers(&self) -> &[String] {
        &self.managers
    }

    pub fn is_manager(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.managers.iter().any(|m| *m == name)
    }

    /// Adds a manager. Duplicates (case insensitive) are ignored.
    pub fn add_manager(&mut self, name: &str) {
        let name = name.to_lowercase();
        if !self.managers.contains(&name) {
            self.managers.push(name);
        }
    }

    /// Removes a manager; returns whether the name was present.
    pub fn remove_manager(&mut self, name: &str) -> bool {
        let name = name.to_lowercase();
        let before = self.managers.len();
        self.managers.retain(|m| *m != name);
        self.managers.len() != before
    }

    pub fn check_code(&self, code: u32) -> bool {
        self.security_code == code
    }

    pub fn set_code(&mut self, code: u32) {
        self.security_code = code;
    }

    /// Both the name and the code must match.
    pub fn authorize(&self, name: &str, code: u32) -> bool {
        self.is_manager(name) && self.check_code(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roster() {
        let roster = Roster::new();
        assert!(roster.is_manager("alice"));
        assert!(roster.is_manager("Bob"));
        assert!(roster.is_manager("CHARLIE"));
        assert!(!roster.is_manager("mallory"));
        assert!(roster.check_code(18041));
    }

    #[test]
    fn test_add_and_remove_manager() {
        let mut roster = Roster::new();
        roster.add_manager("Dave");
        assert!(roster.is_manager("dave"));
        roster.add_manager("DAVE");
        assert_eq!(roster.managers().len(), 4);

        assert!(roster.remove_manager("Dave"));
        assert!(!roster.is_manager("dave"));
        assert!(!roster.remove_manager("dave"));
    }

    #[test]
    fn test_authorize_needs_name_and_code() {
        let mut roster = Roster::new();
        assert!(roster.authorize("alice", 18041));
        assert!(!roster.authorize("alice", 12345));
        assert!(!roster.authorize("mallory", 18041));
        roster.set_code(777);
        assert!(roster.authorize("bob", 777));
        assert!(!roster.authorize("bob", 18041));
    }
}
