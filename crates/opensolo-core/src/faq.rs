//! Frequently asked questions and the accordion that shows them.

use crate::error::{LandingError, LandingResult};

/// A static question/answer pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQ_ENTRIES: [FaqEntry; 7] = [
    FaqEntry {
        question: "What makes OpenSolo the ideal platform for contributors?",
        answer: "OpenSolo streamlines the process of finding, engaging with, and contributing to open-source projects, offering a curated list and tools to enhance your contribution journey.",
    },
    FaqEntry {
        question: "Is it free to join?",
        answer: "Yes, OpenSolo is completely free for both contributors and project maintainers. Our mission is to promote open-source collaboration.",
    },
    FaqEntry {
        question: "How do I start contributing?",
        answer: "Simply browse our project listings, find one that interests you, and follow the contribution guidelines provided by the project maintainers. We also offer resources to help beginners get started.",
    },
    FaqEntry {
        question: "Do I need experience to contribute?",
        answer: "No prior experience is required! Many projects have beginner-friendly tasks, and our community is supportive. We encourage learning by doing.",
    },
    FaqEntry {
        question: "Are there any perks or 'goodies' for active contributors?",
        answer: "Yes! While the primary reward is contributing to open source, we occasionally offer exclusive swag, recognition, and early access to new OpenSolo features for our most active and impactful community members. Stay tuned to our community channels for announcements!",
    },
    FaqEntry {
        question: "Can project maintainers also leverage OpenSolo?",
        answer: "Absolutely! Project maintainers can list their open-source projects on OpenSolo to attract new contributors, showcase their work, and connect with a wider audience of developers looking to help. We review submissions to ensure they meet our quality and community standards.",
    },
    FaqEntry {
        question: "Where can I find support within the OpenSolo community?",
        answer: "We have a vibrant Discord community for real-time support, discussions, and networking. You can also find resources and guides on our platform to help you get started, and connect with other contributors and project maintainers.",
    },
];

/// Which FAQ entry is expanded. At most one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqAccordion {
    len: usize,
    open: Option<usize>,
}

impl FaqAccordion {
    /// All entries collapsed.
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Open `index`, or close it if it is already the open one.
    pub fn toggle(&mut self, index: usize) -> LandingResult<Option<usize>> {
        self.check(index)?;
        self.open = if self.is_open(index) { None } else { Some(index) };
        Ok(self.open)
    }

    /// Explicitly open or close `index`, as requested by the entry's header.
    ///
    /// Closing an entry that is not the open one changes nothing, so a stale
    /// close request from a header rendered before another entry opened is
    /// harmless.
    pub fn set_open(&mut self, index: usize, open: bool) -> LandingResult<Option<usize>> {
        self.check(index)?;
        if open {
            self.open = Some(index);
        } else if self.is_open(index) {
            self.open = None;
        }
        Ok(self.open)
    }

    fn check(&self, index: usize) -> LandingResult<()> {
        if index >= self.len {
            return Err(LandingError::FaqIndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(())
    }
}

impl Default for FaqAccordion {
    fn default() -> Self {
        Self::new(FAQ_ENTRIES.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_collapsed() {
        let accordion = FaqAccordion::default();
        assert_eq!(accordion.len(), 7);
        assert_eq!(accordion.open_index(), None);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut accordion = FaqAccordion::default();
        assert_eq!(accordion.toggle(2).unwrap(), Some(2));
        assert_eq!(accordion.toggle(2).unwrap(), None);
    }

    #[test]
    fn test_opening_another_closes_previous() {
        let mut accordion = FaqAccordion::default();
        accordion.toggle(1).unwrap();
        accordion.toggle(4).unwrap();

        assert!(accordion.is_open(4));
        assert!(!accordion.is_open(1));
    }

    #[test]
    fn test_set_open_false_on_other_entry_keeps_open_one() {
        let mut accordion = FaqAccordion::default();
        accordion.set_open(3, true).unwrap();
        accordion.set_open(5, false).unwrap();
        assert_eq!(accordion.open_index(), Some(3));

        accordion.set_open(3, false).unwrap();
        assert_eq!(accordion.open_index(), None);
    }

    #[test]
    fn test_header_requests_follow_rendered_state() {
        let mut accordion = FaqAccordion::default();

        // Each header asks for the opposite of what it showed when rendered
        let shown = accordion.is_open(2);
        accordion.set_open(2, !shown).unwrap();
        assert_eq!(accordion.open_index(), Some(2));

        let shown = accordion.is_open(6);
        accordion.set_open(6, !shown).unwrap();
        assert_eq!(accordion.open_index(), Some(6));

        let shown = accordion.is_open(6);
        accordion.set_open(6, !shown).unwrap();
        assert_eq!(accordion.open_index(), None);
    }

    #[test]
    fn test_out_of_range_is_rejected_without_change() {
        let mut accordion = FaqAccordion::default();
        accordion.toggle(0).unwrap();

        let err = accordion.toggle(7).unwrap_err();
        assert!(matches!(
            err,
            LandingError::FaqIndexOutOfRange { index: 7, len: 7 }
        ));
        assert_eq!(accordion.open_index(), Some(0));
    }
}
