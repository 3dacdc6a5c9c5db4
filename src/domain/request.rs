//! Generation request: the typed parameters for one content-generation action.

use std::fmt;

use crate::domain::AppError;

/// Target platform the copy will be published on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    #[default]
    Instagram,
    Facebook,
    LinkedIn,
    Blog,
    Email,
}

impl Platform {
    /// All available platforms in presentation order.
    pub const ALL: [Platform; 5] =
        [Platform::Instagram, Platform::Facebook, Platform::LinkedIn, Platform::Blog, Platform::Email];

    /// Human-readable display name, as it appears in the compiled prompt.
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
            Platform::LinkedIn => "LinkedIn",
            Platform::Blog => "Blog",
            Platform::Email => "E-mail",
        }
    }

    /// Parse a platform from a user-supplied name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Platform> {
        match name.to_lowercase().as_str() {
            "instagram" => Some(Platform::Instagram),
            "facebook" => Some(Platform::Facebook),
            "linkedin" => Some(Platform::LinkedIn),
            "blog" => Some(Platform::Blog),
            "e-mail" | "email" => Some(Platform::Email),
            _ => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Tone of voice for the generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Normal,
    Informative,
    Inspiring,
    Urgent,
    Informal,
}

impl Tone {
    pub const ALL: [Tone; 5] =
        [Tone::Normal, Tone::Informative, Tone::Inspiring, Tone::Urgent, Tone::Informal];

    pub fn display_name(&self) -> &'static str {
        match self {
            Tone::Normal => "Normal",
            Tone::Informative => "Informative",
            Tone::Inspiring => "Inspiring",
            Tone::Urgent => "Urgent",
            Tone::Informal => "Informal",
        }
    }

    pub fn from_name(name: &str) -> Option<Tone> {
        match name.to_lowercase().as_str() {
            "normal" => Some(Tone::Normal),
            "informative" => Some(Tone::Informative),
            "inspiring" => Some(Tone::Inspiring),
            "urgent" => Some(Tone::Urgent),
            "informal" => Some(Tone::Informal),
            _ => None,
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Requested length of the generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Length {
    #[default]
    Short,
    Medium,
    Long,
}

impl Length {
    pub const ALL: [Length; 3] = [Length::Short, Length::Medium, Length::Long];

    pub fn display_name(&self) -> &'static str {
        match self {
            Length::Short => "Short",
            Length::Medium => "Medium",
            Length::Long => "Long",
        }
    }

    pub fn from_name(name: &str) -> Option<Length> {
        match name.to_lowercase().as_str() {
            "short" => Some(Length::Short),
            "medium" => Some(Length::Medium),
            "long" => Some(Length::Long),
            _ => None,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Target audience for the generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Audience {
    #[default]
    All,
    YoungAdults,
    Families,
    Seniors,
    Teenagers,
}

impl Audience {
    pub const ALL: [Audience; 5] = [
        Audience::All,
        Audience::YoungAdults,
        Audience::Families,
        Audience::Seniors,
        Audience::Teenagers,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Audience::All => "All",
            Audience::YoungAdults => "Young adults",
            Audience::Families => "Families",
            Audience::Seniors => "Seniors",
            Audience::Teenagers => "Teenagers",
        }
    }

    pub fn from_name(name: &str) -> Option<Audience> {
        match name.to_lowercase().as_str() {
            "all" => Some(Audience::All),
            "young adults" | "young-adults" | "young_adults" => Some(Audience::YoungAdults),
            "families" => Some(Audience::Families),
            "seniors" => Some(Audience::Seniors),
            "teenagers" => Some(Audience::Teenagers),
            _ => None,
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The structured set of user-chosen parameters for one generation action.
///
/// Created fresh per invocation and discarded once the response is rendered;
/// nothing here is persisted.
#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    /// Topic to write about. Required; must not be blank.
    pub topic: String,
    /// Platform the text will be published on.
    pub platform: Platform,
    /// Tone of voice.
    pub tone: Tone,
    /// Requested text length.
    pub length: Length,
    /// Target audience.
    pub audience: Audience,
    /// Whether the text should end with a clear call to action.
    pub include_cta: bool,
    /// Whether relevant hashtags should be appended.
    pub include_hashtags: bool,
    /// Comma-separated SEO keywords. May be empty.
    pub keywords: String,
}

impl GenerationRequest {
    /// Check the request invariants.
    ///
    /// Enum fields are valid by construction; the only runtime invariant is a
    /// non-blank topic.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.topic.trim().is_empty() {
            return Err(AppError::EmptyTopic);
        }
        Ok(())
    }
}

/// Join the display names of an enum's members for error messages.
pub(crate) fn valid_names<T: fmt::Display>(all: &[T]) -> String {
    all.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}
