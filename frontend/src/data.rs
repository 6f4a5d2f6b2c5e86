use crate::components::icons::Icon;

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub topics: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Instructor {
    pub name: &'static str,
    pub role: &'static str,
    pub specialties: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PricingTier {
    pub amount: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", anchor: "#hero" },
    NavLink { label: "Courses", anchor: "#courses" },
    NavLink { label: "Methodology", anchor: "#methodology" },
    NavLink { label: "Instructors", anchor: "#instructors" },
    NavLink { label: "Enroll", anchor: "#enroll" },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: Icon::Users,
        title: "Live Classes",
        text: "3-4 interactive sessions weekly with expert instructors",
    },
    Feature {
        icon: Icon::Globe,
        title: "Global Access",
        text: "Join from anywhere with recordings for all time zones",
    },
    Feature {
        icon: Icon::Star,
        title: "Structured Path",
        text: "Progressive curriculum from foundations to advanced",
    },
];

pub const COURSES: &[Course] = &[
    Course {
        icon: Icon::BookOpen,
        title: "Qur'an Studies",
        description: "Master the divine revelation with precision and understanding",
        topics: &[
            "Qa'idah Madaniyyah - Foundation reading",
            "Tajweed - Rules of recitation",
            "Hifdh - Memorization program",
            "Tafseer - Qur'anic Exegesis",
        ],
    },
    Course {
        icon: Icon::Scroll,
        title: "Qur'anic Sciences",
        description: "Deep dive into the sciences of the Qur'an",
        topics: &[
            "Uloom al-Qur'an - Sciences of the Qur'an",
            "History of revelation and compilation",
            "Principles of interpretation",
            "Miraculous nature of the Qur'an",
        ],
    },
    Course {
        icon: Icon::Globe,
        title: "Arabic Language",
        description: "From basics to advanced grammar and rhetoric",
        topics: &[
            "Nahw - Arabic Grammar",
            "Sarf - Arabic Morphology",
            "Balaghah - Arabic Rhetoric",
            "Madinah University Arabic Curriculum",
        ],
    },
    Course {
        icon: Icon::Book,
        title: "Islamic Jurisprudence",
        description: "Comprehensive study of Islamic law and methodology",
        topics: &[
            "Fiqh - Islamic Jurisprudence",
            "Usool al-Fiqh - Principles of Jurisprudence",
            "Fara'id - Islamic Inheritance Law",
            "Contemporary applications",
        ],
    },
    Course {
        icon: Icon::BookOpen,
        title: "Hadith Sciences",
        description: "Study of prophetic traditions and their sciences",
        topics: &[
            "Mustalah al-Hadith - Science of Hadith",
            "Tareekh as-Sunnah - History of Sunnah Compilation",
            "Authentication methodology",
            "Major hadith collections",
        ],
    },
    Course {
        icon: Icon::Heart,
        title: "Seerah & History",
        description: "The blessed life of Prophet Muhammad ﷺ and Islamic history",
        topics: &[
            "Comprehensive prophetic biography",
            "Lives of the Companions",
            "Islamic civilization",
            "Contemporary lessons",
        ],
    },
];

pub const METHODOLOGY_POINTS: &[&str] = &[
    "Small cohort sizes for personalized attention",
    "Regular assessments and progress tracking",
    "Office hours for additional support",
    "Community engagement through Skool platform",
];

pub const INSTRUCTORS: &[Instructor] = &[
    Instructor {
        name: "Ustādh Tayyib Mohammad",
        role: "Lead Instructor",
        specialties: "Qur'an, Arabic, Fiqh",
    },
    Instructor {
        name: "Guest Instructors",
        role: "Specialized Topics",
        specialties: "Various Islamic Sciences",
    },
    Instructor {
        name: "Teaching Assistants",
        role: "Student Support",
        specialties: "Office Hours & Mentorship",
    },
];

pub const PRICING_TIERS: &[PricingTier] = &[
    PricingTier {
        amount: "$100",
        description: "Sponsors one month of classes",
    },
    PricingTier {
        amount: "$300",
        description: "Sponsors a full quarter",
    },
    PricingTier {
        amount: "$850",
        description: "Sponsors a student for one year",
    },
];
