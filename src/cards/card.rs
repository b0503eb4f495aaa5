//! Card records - immutable after load.
//!
//! A `Card` is one row of the card database: a unique title, a type from the
//! game's fixed vocabulary, the three numeric stats, the rules-text box with
//! its parsed keywords and traits, and every other source column preserved
//! in `columns`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::column::{ColumnValue, Columns};

/// Card type vocabulary.
///
/// The game fixes these; anything else in the source data is carried as
/// `Other` rather than rejected.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum CardType {
    Wrestler,
    Manager,
    CallName,
    Faction,
    Action,
    Strike,
    Grapple,
    Submission,
    Response,
    Boon,
    Injury,
    Other(String),
}

impl CardType {
    /// The three maneuver types matched by the synthetic `"Maneuver"`
    /// filter option.
    pub const MANEUVER_TYPES: [CardType; 3] =
        [CardType::Strike, CardType::Grapple, CardType::Submission];

    /// True for the four persona types (selected via persona slots,
    /// never shown in the general pool).
    #[must_use]
    pub fn is_persona(&self) -> bool {
        matches!(
            self,
            CardType::Wrestler | CardType::Manager | CardType::CallName | CardType::Faction
        )
    }

    /// True for Strike, Grapple, and Submission.
    #[must_use]
    pub fn is_maneuver(&self) -> bool {
        Self::MANEUVER_TYPES.contains(self)
    }

    /// Display name, identical to the source-table spelling.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            CardType::Wrestler => "Wrestler",
            CardType::Manager => "Manager",
            CardType::CallName => "Call Name",
            CardType::Faction => "Faction",
            CardType::Action => "Action",
            CardType::Strike => "Strike",
            CardType::Grapple => "Grapple",
            CardType::Submission => "Submission",
            CardType::Response => "Response",
            CardType::Boon => "Boon",
            CardType::Injury => "Injury",
            CardType::Other(s) => s,
        }
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for CardType {
    fn from(s: &str) -> Self {
        match s.trim() {
            "Wrestler" => CardType::Wrestler,
            "Manager" => CardType::Manager,
            "Call Name" => CardType::CallName,
            "Faction" => CardType::Faction,
            "Action" => CardType::Action,
            "Strike" => CardType::Strike,
            "Grapple" => CardType::Grapple,
            "Submission" => CardType::Submission,
            "Response" => CardType::Response,
            "Boon" => CardType::Boon,
            "Injury" => CardType::Injury,
            other => CardType::Other(other.to_string()),
        }
    }
}

impl From<String> for CardType {
    fn from(s: String) -> Self {
        CardType::from(s.as_str())
    }
}

impl From<CardType> for String {
    fn from(t: CardType) -> Self {
        t.name().to_string()
    }
}

/// A keyword named in a card's text box.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub name: String,
}

impl Keyword {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A trait entry: a name with an optional value (`Target: Head`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trait {
    pub name: String,
    pub value: Option<String>,
}

impl Trait {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// The rules-text box: raw text plus its parsed keywords and traits.
///
/// SmallVec keeps the common case (a handful of entries) off the heap.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TextBox {
    pub raw: String,
    pub keywords: SmallVec<[Keyword; 4]>,
    pub traits: SmallVec<[Trait; 4]>,
}

/// One card of the database.
///
/// ## Example
///
/// ```
/// use ringside::cards::{Card, CardType};
///
/// let card = Card::new("Arm Drag", CardType::Grapple)
///     .with_cost(2)
///     .with_damage(1)
///     .with_column("Signature For", "El Technico Wrestler");
///
/// assert_eq!(card.cost, Some(2));
/// assert_eq!(card.column_text("Signature For"), Some("El Technico Wrestler"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique key across the table.
    pub title: String,

    pub card_type: CardType,

    pub cost: Option<i64>,
    pub damage: Option<i64>,
    pub momentum: Option<i64>,

    pub text: TextBox,

    /// Every source column, normalized, keyed by header name.
    pub columns: Columns,
}

impl Card {
    /// Create a card with empty text and columns.
    #[must_use]
    pub fn new(title: impl Into<String>, card_type: CardType) -> Self {
        Self {
            title: title.into(),
            card_type,
            cost: None,
            damage: None,
            momentum: None,
            text: TextBox::default(),
            columns: Columns::default(),
        }
    }

    #[must_use]
    pub fn with_cost(mut self, cost: i64) -> Self {
        self.cost = Some(cost);
        self
    }

    #[must_use]
    pub fn with_damage(mut self, damage: i64) -> Self {
        self.damage = Some(damage);
        self
    }

    #[must_use]
    pub fn with_momentum(mut self, momentum: i64) -> Self {
        self.momentum = Some(momentum);
        self
    }

    #[must_use]
    pub fn with_raw_text(mut self, raw: impl Into<String>) -> Self {
        self.text.raw = raw.into();
        self
    }

    #[must_use]
    pub fn with_keyword(mut self, name: impl Into<String>) -> Self {
        self.text.keywords.push(Keyword::new(name));
        self
    }

    #[must_use]
    pub fn with_trait(mut self, t: Trait) -> Self {
        self.text.traits.push(t);
        self
    }

    /// Add a source column (builder pattern).
    #[must_use]
    pub fn with_column(mut self, name: impl Into<String>, raw: &str) -> Self {
        self.columns.insert(name.into(), ColumnValue::parse(raw));
        self
    }

    /// Get a source column value.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&ColumnValue> {
        self.columns.get(name)
    }

    /// Get a source column as non-blank text.
    #[must_use]
    pub fn column_text(&self, name: &str) -> Option<&str> {
        self.column(name).and_then(ColumnValue::as_text)
    }

    /// True iff any keyword in the text box has this name.
    #[must_use]
    pub fn has_keyword(&self, name: &str) -> bool {
        self.text.keywords.iter().any(|k| k.name == name)
    }

    /// True iff any trait in the text box has this name.
    #[must_use]
    pub fn has_trait(&self, name: &str) -> bool {
        self.text.traits.iter().any(|t| t.name == name)
    }
}
