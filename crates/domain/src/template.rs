use rand::Rng;

use crate::Focus;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Mode {
    Standard,
    Calisthenics,
}

impl Mode {
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Mode::Standard => "standard",
            Mode::Calisthenics => "calisthenics",
        }
    }

    #[must_use]
    pub fn template(self) -> &'static Template {
        match self {
            Mode::Standard => &STANDARD,
            Mode::Calisthenics => &CALISTHENICS,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Slot {
    Focus(Focus),
    /// Resolved to either neck or grip once per template attempt.
    NeckOrGrip,
}

/// One rendered line of a template: a fixed prescription covering one or more slots.
#[derive(Debug)]
pub struct Line {
    pub prescription: &'static str,
    pub slots: &'static [Slot],
}

/// Fixed workout structure. The focus sequence is the concatenation of the slots of all lines.
#[derive(Debug)]
pub struct Template {
    pub mode: Mode,
    pub lines: &'static [Line],
}

impl Template {
    pub fn slots(&self) -> impl Iterator<Item = &'static Slot> {
        self.lines.iter().flat_map(|l| l.slots.iter())
    }

    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.lines.iter().map(|l| l.slots.len()).sum()
    }

    /// Fixes every neck-or-grip slot to the outcome of a single fair coin flip.
    pub fn resolve<G: Rng + ?Sized>(&self, rng: &mut G) -> Vec<Focus> {
        let substitute = self
            .slots()
            .any(|s| *s == Slot::NeckOrGrip)
            .then(|| {
                if rng.gen_bool(0.5) {
                    Focus::Neck
                } else {
                    Focus::Grip
                }
            });
        self.slots()
            .map(|slot| match slot {
                Slot::Focus(focus) => *focus,
                Slot::NeckOrGrip => substitute.unwrap_or(Focus::Neck),
            })
            .collect()
    }
}

pub static STANDARD: Template = Template {
    mode: Mode::Standard,
    lines: &[
        Line {
            prescription: "5 x 5",
            slots: &[Slot::Focus(Focus::WheelHouse), Slot::Focus(Focus::Assist)],
        },
        Line {
            prescription: "3 x 8",
            slots: &[Slot::Focus(Focus::PullUp), Slot::Focus(Focus::PushUp)],
        },
        Line {
            prescription: "3 x 5",
            slots: &[Slot::Focus(Focus::WheelHouse), Slot::Focus(Focus::Assist)],
        },
        Line {
            prescription: "3 x 12",
            slots: &[Slot::Focus(Focus::Abs), Slot::NeckOrGrip],
        },
    ],
};

pub static CALISTHENICS: Template = Template {
    mode: Mode::Calisthenics,
    lines: &[
        Line {
            prescription: "5 x max",
            slots: &[Slot::Focus(Focus::PullUp)],
        },
        Line {
            prescription: "5 x max",
            slots: &[Slot::Focus(Focus::PushUp)],
        },
        Line {
            prescription: "4 x 20",
            slots: &[Slot::Focus(Focus::WheelHouse)],
        },
        Line {
            prescription: "3 x 30s",
            slots: &[Slot::Focus(Focus::Abs)],
        },
        Line {
            prescription: "3 x max",
            slots: &[Slot::Focus(Focus::PullUp)],
        },
        Line {
            prescription: "3 x max",
            slots: &[Slot::Focus(Focus::PushUp)],
        },
    ],
};
