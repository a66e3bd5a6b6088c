//! Tokenized settings line.

/// One line of a settings export, split on whitespace.
///
/// Field 0 is the record keyword, field 1 the host, fields 2.. the value.
/// Record shapes vary by type, so accessors return `Option` rather than
/// assuming a field count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLine {
    raw: String,
    fields: Vec<String>,
}

impl ConfigLine {
    /// Splits `raw` on runs of spaces and tabs.
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            fields: raw.split_whitespace().map(str::to_string).collect(),
        }
    }

    /// The line as read, for echoing in reports.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// All whitespace-delimited fields.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Number of fields, keyword included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True for blank and whitespace-only lines.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Record keyword (`a`, `txt`, ...).
    pub fn keyword(&self) -> Option<&str> {
        self.field(0)
    }

    /// Host token.
    pub fn host(&self) -> Option<&str> {
        self.field(1)
    }

    /// First value token.
    pub fn value(&self) -> Option<&str> {
        self.field(2)
    }

    /// Field at `index`.
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// Value tokens rejoined with single spaces.
    ///
    /// Exports split long TXT values (SPF, DKIM keys) on whitespace; the
    /// record's text is every field after the host.
    pub fn joined_value(&self) -> Option<String> {
        if self.fields.len() < 3 {
            return None;
        }
        Some(self.fields[2..].join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_spaces_and_tabs() {
        let line = ConfigLine::parse("mx\t@  mail.example.com.");
        assert_eq!(line.fields(), ["mx", "@", "mail.example.com."]);
        assert_eq!(line.raw(), "mx\t@  mail.example.com.");
        assert_eq!(line.keyword(), Some("mx"));
        assert_eq!(line.host(), Some("@"));
        assert_eq!(line.value(), Some("mail.example.com."));
    }

    #[test]
    fn test_blank_line_has_no_fields() {
        let line = ConfigLine::parse("   \t ");
        assert!(line.is_empty());
        assert_eq!(line.keyword(), None);
    }

    #[test]
    fn test_joined_value_rejoins_split_text() {
        let line = ConfigLine::parse("txt @ v=spf1   include:_spf.example.com ~all");
        assert_eq!(
            line.joined_value().as_deref(),
            Some("v=spf1 include:_spf.example.com ~all")
        );
    }

    #[test]
    fn test_joined_value_requires_a_value() {
        assert_eq!(ConfigLine::parse("txt @").joined_value(), None);
    }
}
