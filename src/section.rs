//! The fixed, ordered set of portfolio sections and the camera pose each one
//! is framed from.

use crate::math::Vec3;
use std::fmt;
use std::str::FromStr;

/// One of the seven content states of the portfolio.
///
/// Declaration order is navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Hero,
    About,
    Skills,
    Projects,
    Experience,
    Achievements,
    Contact,
}

/// Position and Euler rotation of the virtual camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl CameraPose {
    pub const fn new(position: Vec3, rotation: Vec3) -> Self {
        CameraPose { position, rotation }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectionError {
    #[error("unknown section name: {0:?}")]
    UnknownName(String),
    #[error("section number {0} is out of range (1-7)")]
    OutOfRange(usize),
}

impl Section {
    pub const COUNT: usize = 7;

    /// Every section, in navigation order
    pub const ALL: [Section; Section::COUNT] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Achievements,
        Section::Contact,
    ];

    /// Zero-based position in navigation order
    pub fn index(self) -> usize {
        self as usize
    }

    /// The section at `index`, if any
    pub fn from_index(index: usize) -> Option<Section> {
        Section::ALL.get(index).copied()
    }

    /// Next section, wrapping from the last back to the first
    pub fn successor(self) -> Section {
        Section::ALL[(self.index() + 1) % Section::COUNT]
    }

    /// Previous section, wrapping from the first to the last
    pub fn predecessor(self) -> Section {
        Section::ALL[(self.index() + Section::COUNT - 1) % Section::COUNT]
    }

    /// Next section without wrapping
    pub fn next(self) -> Option<Section> {
        Section::from_index(self.index() + 1)
    }

    /// Previous section without wrapping
    pub fn previous(self) -> Option<Section> {
        self.index().checked_sub(1).and_then(Section::from_index)
    }

    /// Stable lowercase identifier
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Achievements => "achievements",
            Section::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar
    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Nexus",
            Section::About => "Bio",
            Section::Skills => "Tech",
            Section::Projects => "Work",
            Section::Experience => "Journey",
            Section::Achievements => "Glory",
            Section::Contact => "Connect",
        }
    }

    /// Resolves a 1-based section number, as typed on the number row
    pub fn from_number(number: usize) -> Result<Section, SectionError> {
        number
            .checked_sub(1)
            .and_then(Section::from_index)
            .ok_or(SectionError::OutOfRange(number))
    }

    /// Where the camera sits while this section is shown
    pub fn camera_target(self) -> CameraPose {
        CAMERA_TARGETS[self.index()]
    }
}

/// Camera pose per section, indexed by [`Section::index`]
const CAMERA_TARGETS: [CameraPose; Section::COUNT] = [
    CameraPose::new([0.0, 0.0, 20.0], [0.0, 0.0, 0.0]),
    CameraPose::new([-10.0, 3.0, 18.0], [0.0, 0.5, 0.0]),
    CameraPose::new([0.0, 12.0, 15.0], [-0.6, 0.0, 0.0]),
    CameraPose::new([18.0, -2.0, 25.0], [0.2, -0.6, 0.0]),
    CameraPose::new([-8.0, -22.0, 28.0], [0.7, 0.5, 0.0]),
    CameraPose::new([15.0, 22.0, 28.0], [-0.7, -0.5, 0.0]),
    CameraPose::new([0.0, 0.0, 16.0], [0.0, 0.0, 0.0]),
];

/// Camera pose for `section`
pub fn camera_target_for(section: Section) -> CameraPose {
    section.camera_target()
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = SectionError;

    /// Accepts a section id in any case, or its 1-based number
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<usize>() {
            return Section::from_number(number);
        }
        Section::ALL
            .iter()
            .copied()
            .find(|section| section.id().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| SectionError::UnknownName(s.to_string()))
    }
}
