/// Scalar string fields of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Fullname,
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Fullname,
        Field::Username,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// Stable key used as the error path for this field.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Fullname => "fullname",
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }

    /// Human-friendly label for prompts.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Fullname => "Full Name",
            Field::Username => "Username",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

/// The two mutually exclusive checkbox flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toggle {
    Designation,
    Working,
}

impl Toggle {
    pub fn key(&self) -> &'static str {
        match self {
            Toggle::Designation => "designation",
            Toggle::Working => "working",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Toggle::Designation => "I am student",
            Toggle::Working => "I am working in company",
        }
    }

    /// The flag whose control locks this one while set.
    pub fn opposite(&self) -> Toggle {
        match self {
            Toggle::Designation => Toggle::Working,
            Toggle::Working => Toggle::Designation,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "designation" => Some(Toggle::Designation),
            "working" => Some(Toggle::Working),
            _ => None,
        }
    }
}

/// The two repeated sections gated by the toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Education,
    Company,
}

impl SectionKind {
    pub const ALL: [SectionKind; 2] = [SectionKind::Education, SectionKind::Company];

    pub fn key(&self) -> &'static str {
        match self {
            SectionKind::Education => "education",
            SectionKind::Company => "company",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SectionKind::Education => "Education Institute",
            SectionKind::Company => "Company Name",
        }
    }

    /// The toggle that makes this section visible.
    pub fn gate(&self) -> Toggle {
        match self {
            SectionKind::Education => Toggle::Designation,
            SectionKind::Company => Toggle::Working,
        }
    }

    /// Error path for the row at the given display position,
    /// e.g. `education[2].name`.
    pub fn entry_path(&self, index: usize) -> String {
        format!("{}[{}].name", self.key(), index)
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "education" => Some(SectionKind::Education),
            "company" => Some(SectionKind::Company),
            _ => None,
        }
    }
}
