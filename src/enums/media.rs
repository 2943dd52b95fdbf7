/// FHIR coding system for `Language` codes
pub const LANGUAGE_CODING_SYSTEM: &str = "urn:ietf:bcp:47";
pub const LANGUAGE_CODING_VERSION: &str = "";

string_enum! {
    /// Accepted upload formats
    ContentType {
        Png => "PNG",
        Jpg => "JPG",
        Pdf => "PDF",
    }
}

string_enum! {
    /// BCP 47 language code
    Language {
        En => "en",
        Sw => "sw",
    }
}

impl Language {
    /// Human readable name
    pub fn name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Sw => "Swahili",
        }
    }
}

string_enum! {
    CalendarView {
        Day => "DAY",
        Week => "WEEK",
    }
}

string_enum! {
    /// Registered SMS sender identities
    SenderId {
        Slade360 => "SLADE360",
        Bewell => "BEWELL",
    }
}
