use rand::Rng;
use serde::{Deserialize, Serialize};

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of a generated contact identifier.
pub const ID_LEN: usize = 7;

/// The only persisted entity.
///
/// Stored as part of a JSON array under a single storage key. Field names on
/// the wire are camelCase (`createdAt`). String fields missing from stored data
/// read back as empty strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    /// Milliseconds since the Unix epoch.
    pub created_at: u64,
    #[serde(default)]
    pub first: String,
    #[serde(default)]
    pub last: String,
    #[serde(default)]
    pub twitter: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub favorite: bool,
}

impl Contact {
    /// A blank record, as produced by the "new contact" action.
    pub fn blank(id: String, created_at: u64) -> Self {
        Self {
            id,
            created_at,
            first: String::new(),
            last: String::new(),
            twitter: String::new(),
            avatar: String::new(),
            notes: String::new(),
            favorite: false,
        }
    }

    /// "First Last", or `None` when both names are empty.
    pub fn full_name(&self) -> Option<String> {
        if self.first.is_empty() && self.last.is_empty() {
            return None;
        }
        Some(format!("{} {}", self.first, self.last).trim().to_string())
    }

    /// The stored avatar, falling back to a generated robot picture.
    pub fn avatar_url(&self) -> String {
        if self.avatar.is_empty() {
            format!("https://robohash.org/{}.png?size=200x200", self.id)
        } else {
            self.avatar.clone()
        }
    }
}

/// A partial update. Only fields that are `Some` are merged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContactUpdate {
    pub first: Option<String>,
    pub last: Option<String>,
    pub twitter: Option<String>,
    pub avatar: Option<String>,
    pub notes: Option<String>,
    pub favorite: Option<bool>,
}

impl ContactUpdate {
    pub fn favorite(favorite: bool) -> Self {
        Self {
            favorite: Some(favorite),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply_to(self, contact: &mut Contact) {
        if let Some(first) = self.first {
            contact.first = first;
        }
        if let Some(last) = self.last {
            contact.last = last;
        }
        if let Some(twitter) = self.twitter {
            contact.twitter = twitter;
        }
        if let Some(avatar) = self.avatar {
            contact.avatar = avatar;
        }
        if let Some(notes) = self.notes {
            contact.notes = notes;
        }
        if let Some(favorite) = self.favorite {
            contact.favorite = favorite;
        }
    }
}

/// Generates a random base-36 identifier of `ID_LEN` characters.
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
