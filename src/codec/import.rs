//! Deck-list import: line state machine over pasted deck text.
//!
//! Two dialects are understood at once: the third-party tabletop format
//! (`Starting:` persona section, `Purchase_Deck:`, `Tokens:`) and this
//! crate's own export (dashed deck banners, `Wrestler:`-style persona
//! assignment lines, an `--- Analysis ---` appendix).
//!
//! Anomalies degrade: unresolvable or malformed lines are skipped, card
//! misses are collected as warnings. The single hard failure is an import
//! that yields no cards at all. The parse builds a full `ParsedDeck`
//! proposal; committing it to live state is the caller's step.

use log::{debug, warn};
use thiserror::Error;

use crate::cards::{Card, CardTable};
use crate::persona::{kit_persona, PersonaRole};

/// Import hard failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImportError {
    #[error("No cards were imported. Check the deck list format.")]
    NoCardsImported,
}

/// Per-line soft anomaly, collected rather than fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportWarning {
    /// A card line whose name resolved to nothing in the table.
    UnknownCard { line: usize, name: String },
    /// A persona-section card that is not a persona type.
    NotAPersona { line: usize, title: String },
    /// A persona assignment line whose name resolved to nothing.
    UnknownPersona { line: usize, name: String },
}

/// The proposed result of an import: decks, personas, and the anomalies
/// encountered along the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedDeck {
    pub starting: Vec<String>,
    pub purchase: Vec<String>,
    pub wrestler: Option<Card>,
    pub manager: Option<Card>,
    pub call_name: Option<Card>,
    pub faction: Option<Card>,
    pub warnings: Vec<ImportWarning>,
}

impl ParsedDeck {
    /// The proposed persona for a role.
    #[must_use]
    pub fn persona(&self, role: PersonaRole) -> Option<&Card> {
        match role {
            PersonaRole::Wrestler => self.wrestler.as_ref(),
            PersonaRole::Manager => self.manager.as_ref(),
            PersonaRole::CallName => self.call_name.as_ref(),
            PersonaRole::Faction => self.faction.as_ref(),
        }
    }

    fn set_persona(&mut self, role: PersonaRole, card: Card) {
        match role {
            PersonaRole::Wrestler => self.wrestler = Some(card),
            PersonaRole::Manager => self.manager = Some(card),
            PersonaRole::CallName => self.call_name = Some(card),
            PersonaRole::Faction => self.faction = Some(card),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    Starting,
    Purchase,
    Personas,
    Ignored,
}

/// Parse deck-list text against the card table.
///
/// Fails only when both proposed decks come out empty.
pub fn parse_deck_text(text: &str, table: &CardTable) -> Result<ParsedDeck, ImportError> {
    let mut parsed = ParsedDeck::default();
    let mut section = Section::Starting;

    for (index, raw_line) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(next) = section_header(line) {
            section = next;
            continue;
        }

        if section == Section::Ignored {
            continue;
        }

        if let Some((role, remainder)) = persona_assignment(line) {
            resolve_persona(role, remainder, table, line_no, &mut parsed);
            continue;
        }

        let Some((count, name)) = card_line(line) else {
            debug!("deck import: skipping line {line_no}: {line:?}");
            continue;
        };

        let Some(card) = resolve_card(&name, table) else {
            warn!("deck import: unknown card {name:?} on line {line_no}");
            parsed.warnings.push(ImportWarning::UnknownCard {
                line: line_no,
                name,
            });
            continue;
        };

        match section {
            Section::Personas => match PersonaRole::of_card_type(&card.card_type) {
                Some(role) => parsed.set_persona(role, card.clone()),
                None => {
                    warn!(
                        "deck import: {:?} on line {line_no} is not a persona card",
                        card.title
                    );
                    parsed.warnings.push(ImportWarning::NotAPersona {
                        line: line_no,
                        title: card.title.clone(),
                    });
                }
            },
            Section::Starting => {
                for _ in 0..count {
                    parsed.starting.push(card.title.clone());
                }
            }
            Section::Purchase => {
                for _ in 0..count {
                    parsed.purchase.push(card.title.clone());
                }
            }
            Section::Ignored => unreachable!("ignored section handled above"),
        }
    }

    if parsed.starting.is_empty() && parsed.purchase.is_empty() {
        return Err(ImportError::NoCardsImported);
    }
    Ok(parsed)
}

/// Recognize a section header, in either dialect.
fn section_header(line: &str) -> Option<Section> {
    let lower = line.to_lowercase();
    match lower.as_str() {
        "starting:" => return Some(Section::Personas),
        "purchase_deck:" | "purchase deck:" => return Some(Section::Purchase),
        "tokens:" => return Some(Section::Ignored),
        _ => {}
    }

    // Exporter banners: `--- Starting Deck (12/24) ---` and friends.
    if lower.starts_with("---") {
        let core = lower.trim_matches(|c: char| c == '-' || c.is_whitespace());
        if core.starts_with("starting deck") {
            return Some(Section::Starting);
        }
        if core.starts_with("purchase deck") {
            return Some(Section::Purchase);
        }
        if core.starts_with("analysis") {
            return Some(Section::Ignored);
        }
    }
    None
}

/// Recognize an exporter persona assignment line (`Wrestler: <name>`).
fn persona_assignment(line: &str) -> Option<(PersonaRole, &str)> {
    for role in PersonaRole::ALL {
        let prefix = format!("{}:", role.name());
        let bytes = line.as_bytes();
        if bytes.len() >= prefix.len()
            && bytes[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
        {
            return Some((role, line[prefix.len()..].trim()));
        }
    }
    None
}

fn resolve_persona(
    role: PersonaRole,
    name: &str,
    table: &CardTable,
    line_no: usize,
    parsed: &mut ParsedDeck,
) {
    if name.is_empty() || name.eq_ignore_ascii_case("none") {
        return;
    }

    // Exact title, title with the role suffix restored, then a scan for a
    // persona of this role whose kit name matches. The resolved card must
    // actually be of the named role.
    let card = table
        .get(name)
        .or_else(|| table.get(&format!("{name}{}", role.suffix())))
        .filter(|c| PersonaRole::of_card_type(&c.card_type) == Some(role))
        .or_else(|| {
            table.find(|c| {
                PersonaRole::of_card_type(&c.card_type) == Some(role)
                    && kit_persona(c).as_deref() == Some(name)
            })
            .next()
        });

    match card {
        Some(card) => parsed.set_persona(role, card.clone()),
        None => {
            warn!("deck import: unknown {role} persona {name:?} on line {line_no}");
            parsed.warnings.push(ImportWarning::UnknownPersona {
                line: line_no,
                name: name.to_string(),
            });
        }
    }
}

/// Match `<int>[x] <name>`, with any trailing `[...]` annotation stripped.
fn card_line(line: &str) -> Option<(usize, String)> {
    let digits_end = line.find(|c: char| !c.is_ascii_digit())?;
    if digits_end == 0 {
        return None;
    }
    let count: usize = line[..digits_end].parse().ok()?;

    let mut rest = &line[digits_end..];
    if let Some(stripped) = rest.strip_prefix(['x', 'X']) {
        rest = stripped;
    }
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let mut name = rest.trim();
    if name.ends_with(']') {
        if let Some(open) = name.rfind('[') {
            name = name[..open].trim_end();
        }
    }
    if name.is_empty() {
        return None;
    }
    Some((count, name.to_string()))
}

/// Exact title lookup, retried with any parenthesized substring removed.
fn resolve_card<'a>(name: &str, table: &'a CardTable) -> Option<&'a Card> {
    if let Some(card) = table.get(name) {
        return Some(card);
    }
    let without_parens = strip_parenthetical(name);
    if without_parens != name {
        return table.get(&without_parens);
    }
    None
}

fn strip_parenthetical(name: &str) -> String {
    let Some(open) = name.find('(') else {
        return name.to_string();
    };
    let Some(close) = name[open..].find(')') else {
        return name.to_string();
    };
    let mut stripped = String::with_capacity(name.len());
    stripped.push_str(name[..open].trim_end());
    let tail = name[open + close + 1..].trim_start();
    if !tail.is_empty() {
        stripped.push(' ');
        stripped.push_str(tail);
    }
    stripped
}
