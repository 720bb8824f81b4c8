// Static portfolio content the 3D foreground is built from.

use crate::constants::*;
use glam::Vec3;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub color: Vec3,
}

const fn project(id: u32, title: &'static str, color: Vec3) -> Project {
    Project { id, title, color }
}

const TASKS: &str = "Task Management App";

pub const PROJECTS: [Project; 8] = [
    project(1, "E-Commerce Platform", CYAN),
    project(2, "3D Portfolio Website", ORANGE),
    project(3, TASKS, EMERALD),
    project(4, TASKS, EMERALD),
    project(5, TASKS, EMERALD),
    project(6, TASKS, EMERALD),
    project(7, TASKS, EMERALD),
    project(8, TASKS, EMERALD),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    pub level: f32,
    pub color: Vec3,
}

const fn skill(name: &'static str, level: f32, color: Vec3) -> Skill {
    Skill { name, level, color }
}

pub const SKILLS: [Skill; 6] = [
    skill("React", 0.9, Vec3::new(0.38, 0.855, 0.984)),
    skill("TypeScript", 0.85, Vec3::new(0.192, 0.471, 0.776)),
    skill("JavaScript", 0.95, Vec3::new(0.969, 0.875, 0.118)),
    skill("Node.js", 0.9, Vec3::new(0.082, 0.447, 0.714)),
    skill("React Native", 0.8, Vec3::new(0.38, 0.855, 0.984)),
    skill("MongoDB", 0.8, Vec3::new(0.278, 0.635, 0.282)),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FormField {
    pub name: &'static str,
    pub y: f32,
    pub color: Vec3,
}

const fn form_field(name: &'static str, y: f32, color: Vec3) -> FormField {
    FormField { name, y, color }
}

pub const FORM_FIELDS: [FormField; 4] = [
    form_field("Name", 1.0, CYAN),
    form_field("Email", 0.3, ORANGE),
    form_field("Subject", -0.4, EMERALD),
    form_field("Message", -1.1, VIOLET),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SocialLink {
    pub name: &'static str,
    pub y: f32,
    pub color: Vec3,
}

const fn social_link(name: &'static str, y: f32, color: Vec3) -> SocialLink {
    SocialLink { name, y, color }
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    social_link("LinkedIn", 1.5, CYAN),
    social_link("GitHub", 0.5, Vec3::new(0.2, 0.2, 0.2)),
    social_link("Twitter", -0.5, Vec3::new(0.114, 0.631, 0.949)),
    social_link("Email", -1.5, ORANGE),
];

/// Named values read from the contact form at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    fields: Vec<(String, String)>,
}

impl ContactSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one control. Unnamed controls (the submit button) are skipped and
    /// a repeated name keeps the latest value.
    pub fn push(&mut self, name: &str, value: &str) {
        if name.is_empty() {
            return;
        }
        match self.fields.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_owned(),
            None => self.fields.push((name.to_owned(), value.to_owned())),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// `{name: "Ada", message: "hi\nthere"}`, in form order.
impl fmt::Display for ContactSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {:?}", name, value)?;
        }
        f.write_str("}")
    }
}
