//! First-run walkthrough.

/// One page of the tutorial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TutorialStep {
    pub title: &'static str,
    pub body: &'static str,
}

pub const TUTORIAL_STEPS: &[TutorialStep] = &[
    TutorialStep {
        title: "Welcome to TypeToDo!",
        body: "This quick tour walks you through the main features.",
    },
    TutorialStep {
        title: "Add New Tasks",
        body: "Press 'a', type your task and hit Enter.",
    },
    TutorialStep {
        title: "Edit Tasks",
        body: "Select a task with j/k and press 'e' to change its text.",
    },
    TutorialStep {
        title: "Reorder Tasks",
        body: "Press 'm' to pick a task up, move it with j/k and drop it with Enter. 't' moves it to the top.",
    },
    TutorialStep {
        title: "Use Hashtags",
        body: "Write hashtags like #work in a task to tag it.",
    },
    TutorialStep {
        title: "Filter by Hashtags",
        body: "Press Tab to reach the tag bar. Space cycles a tag through include, exclude and off. 'n' filters on untagged tasks.",
    },
    TutorialStep {
        title: "Undo Actions",
        body: "Press 'u' right after adding a task to remove it again.",
    },
    TutorialStep {
        title: "Toggle Dark Mode",
        body: "Press 'T' to switch between light and dark colors.",
    },
    TutorialStep {
        title: "All Set!",
        body: "Press '?' to see this tour again and 'h' for every key binding.",
    },
];

/// Position within [`TUTORIAL_STEPS`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tutorial {
    step: usize,
}

impl Tutorial {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> &'static TutorialStep {
        &TUTORIAL_STEPS[self.step]
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.step
    }

    #[must_use]
    pub fn len(&self) -> usize {
        TUTORIAL_STEPS.len()
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.step + 1 == TUTORIAL_STEPS.len()
    }

    /// Advance; returns false when already on the last step.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.step += 1;
        true
    }

    pub fn previous(&mut self) {
        self.step = self.step.saturating_sub(1);
    }

    pub fn restart(&mut self) {
        self.step = 0;
    }
}
