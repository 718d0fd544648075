//! Minimal selector engine for the test host.
//!
//! Supports comma-separated lists of compound selectors built from a tag (or
//! `*`), `.class`, `#id` and the `:input` pseudo-class. Anything else fails to
//! parse and never matches.

use smallvec::SmallVec;

const INPUT_TAGS: [&str; 4] = ["input", "textarea", "select", "button"];

/// Attributes a selector can look at.
pub trait SelectorSubject {
    fn tag(&self) -> &str;
    fn id(&self) -> Option<&str>;
    fn has_class(&self, class: &str) -> bool;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: SmallVec<[String; 2]>,
    input: bool,
}

impl Compound {
    fn matches(&self, subject: &dyn SelectorSubject) -> bool {
        if let Some(tag) = &self.tag {
            if !subject.tag().eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if subject.id() != Some(id.as_str()) {
                return false;
            }
        }
        if self.input && !INPUT_TAGS.iter().any(|t| subject.tag().eq_ignore_ascii_case(t)) {
            return false;
        }
        self.classes.iter().all(|class| subject.has_class(class))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selector {
    alternatives: SmallVec<[Compound; 1]>,
}

impl Selector {
    pub fn parse(source: &str) -> Option<Self> {
        let alternatives = source
            .split(',')
            .map(|part| parse_compound(part.trim()))
            .collect::<Option<SmallVec<[Compound; 1]>>>()?;
        Some(Self { alternatives })
    }

    pub fn matches(&self, subject: &dyn SelectorSubject) -> bool {
        self.alternatives.iter().any(|c| c.matches(subject))
    }
}

/// Parses and matches in one go; unparsable selectors never match.
pub fn matches(selector: &str, subject: &dyn SelectorSubject) -> bool {
    match Selector::parse(selector) {
        Some(selector) => selector.matches(subject),
        None => {
            log::debug!("unsupported selector `{selector}`");
            false
        }
    }
}

fn parse_compound(source: &str) -> Option<Compound> {
    if source.is_empty() || source.contains(char::is_whitespace) {
        return None;
    }

    let mut compound = Compound::default();
    let mut rest = source;

    let tag_len = rest
        .find(|c: char| c == '.' || c == '#' || c == ':')
        .unwrap_or(rest.len());
    let tag = &rest[..tag_len];
    if !tag.is_empty() && tag != "*" {
        compound.tag = Some(tag.to_ascii_lowercase());
    }
    rest = &rest[tag_len..];

    while let Some(marker) = rest.chars().next() {
        let body = &rest[1..];
        let len = body
            .find(|c: char| c == '.' || c == '#' || c == ':')
            .unwrap_or(body.len());
        let name = &body[..len];
        if name.is_empty() {
            return None;
        }
        match marker {
            '.' => compound.classes.push(name.to_string()),
            '#' => compound.id = Some(name.to_string()),
            ':' if name == "input" => compound.input = true,
            _ => return None,
        }
        rest = &body[len..];
    }

    Some(compound)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Subject {
        tag: &'static str,
        id: Option<&'static str>,
        classes: &'static [&'static str],
    }

    impl SelectorSubject for Subject {
        fn tag(&self) -> &str {
            self.tag
        }

        fn id(&self) -> Option<&str> {
            self.id
        }

        fn has_class(&self, class: &str) -> bool {
            self.classes.contains(&class)
        }
    }

    const ITEM: Subject = Subject {
        tag: "li",
        id: Some("first"),
        classes: &["item", "selected"],
    };

    const FIELD: Subject = Subject {
        tag: "textarea",
        id: None,
        classes: &[],
    };

    #[test]
    fn compound_selectors() {
        assert!(matches("li", &ITEM));
        assert!(matches(".item", &ITEM));
        assert!(matches("li.item.selected", &ITEM));
        assert!(matches("#first", &ITEM));
        assert!(matches("*", &ITEM));
        assert!(!matches("li.missing", &ITEM));
        assert!(!matches("div", &ITEM));
    }

    #[test]
    fn input_pseudo_class() {
        assert!(matches(":input", &FIELD));
        assert!(!matches(":input", &ITEM));
    }

    #[test]
    fn selector_lists_match_any_alternative() {
        assert!(matches("div, .item", &ITEM));
        assert!(matches("div, :input", &FIELD));
    }

    #[test]
    fn unsupported_syntax_never_matches() {
        assert_eq!(Selector::parse("ul li"), None);
        assert_eq!(Selector::parse("li:hover"), None);
        assert_eq!(Selector::parse(""), None);
        assert!(!matches("ul > li", &ITEM));
    }
}
