//! Compiled-in portfolio content.

pub const NAME: &str = "nitrix";
pub const HEADLINE: &str = "Network & Reverse Engineer";
pub const LOCATION: &str = "Jacksonville, FL";
pub const AVATAR_URL: &str = "https://files.catbox.moe/ubocet.png";
pub const EMAIL: &str = "nitrix@cocaine.ninja";

pub struct FocusArea {
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const FOCUS_AREAS: &[FocusArea] = &[
    FocusArea {
        icon: "\u{25c8}",
        title: "Reverse Engineering",
        blurb: "Malware & game hacking",
    },
    FocusArea {
        icon: "\u{21c4}",
        title: "Networking",
        blurb: "Protocol & traffic analysis",
    },
    FocusArea {
        icon: "\u{2726}",
        title: "Artificial Intelligence",
        blurb: "ML & neural networks",
    },
];

/// Skill category name and its labels, in display order.
pub type SkillCategory = (&'static str, &'static [&'static str]);

pub const SKILLS: &[SkillCategory] = &[
    ("Reverse Engineering", &["IDA Pro", "x64dbg", "Cheat Engine"]),
    ("Networking", &["Wireshark", "Nmap", "BGP", "RIPE", "AS56971"]),
    ("AI/ML", &["PyTorch", "TensorFlow", "CUDA", "OpenCV"]),
    ("Languages", &["Python", "C/C++", "Go", "TypeScript"]),
];

pub fn mailto() -> String {
    format!("mailto:{EMAIL}")
}
