use super::ids::DocId;
use phf::{Map, phf_map};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Module,
    Function,
    Class,
    Method,
    Exception,
    Data,
    Attribute,
    Other, // Any role without a dedicated variant (e.g., "std:label", "c:macro")
}

// Role names as they appear after the domain prefix in `objtypes` ("py:function").
static ROLE_KINDS: Map<&'static str, ObjectKind> = phf_map! {
    "module" => ObjectKind::Module,
    "function" => ObjectKind::Function,
    "class" => ObjectKind::Class,
    "method" => ObjectKind::Method,
    "classmethod" => ObjectKind::Method,
    "staticmethod" => ObjectKind::Method,
    "exception" => ObjectKind::Exception,
    "data" => ObjectKind::Data,
    "attribute" => ObjectKind::Attribute,
    "property" => ObjectKind::Attribute,
};

impl ObjectKind {
    pub fn from_role(role: &str) -> Self {
        ROLE_KINDS
            .get(role.trim())
            .copied()
            .unwrap_or(ObjectKind::Other)
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Module => "module",
                Self::Function => "function",
                Self::Class => "class",
                Self::Method => "method",
                Self::Exception => "exception",
                Self::Data => "data",
                Self::Attribute => "attribute",
                Self::Other => "other",
            }
        )
    }
}

/// One row of the index's object type table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectType {
    pub domain: String,       // e.g., "py"
    pub role: String,         // e.g., "function"
    pub display_name: String, // e.g., "Python function"
    pub kind: ObjectKind,
}

impl ObjectType {
    pub fn new(domain: &str, role: &str, display_name: &str) -> Self {
        Self {
            domain: domain.to_string(),
            role: role.to_string(),
            display_name: display_name.to_string(),
            kind: ObjectKind::from_role(role),
        }
    }

    pub fn qualified_role(&self) -> String {
        format!("{}:{}", self.domain, self.role)
    }
}

/// Object type codes as stored in object entries, mapped to their descriptions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectTypeTable {
    types: BTreeMap<u32, ObjectType>,
}

impl ObjectTypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: u32, object_type: ObjectType) -> Option<ObjectType> {
        self.types.insert(code, object_type)
    }

    pub fn get(&self, code: u32) -> Option<&ObjectType> {
        self.types.get(&code)
    }

    pub fn contains(&self, code: u32) -> bool {
        self.types.contains_key(&code)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &ObjectType)> {
        self.types.iter().map(|(code, ty)| (*code, ty))
    }

    pub fn code_of(&self, domain: &str, role: &str) -> Option<u32> {
        self.types
            .iter()
            .find(|(_, ty)| ty.domain == domain && ty.role == role)
            .map(|(code, _)| *code)
    }

    /// Returns the code for `domain:role`, registering it under the next free code if absent.
    pub fn ensure(&mut self, domain: &str, role: &str, display_name: &str) -> u32 {
        if let Some(code) = self.code_of(domain, role) {
            return code;
        }
        let code = self.types.keys().next_back().map_or(0, |last| last + 1);
        self.types
            .insert(code, ObjectType::new(domain, role, display_name));
        code
    }
}

/// Search weight of a documented object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Important,
    Default,
    Unimportant,
    Hidden, // Indexed for cross-references but never shown in search results
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid object priority {0} (expected -1, 0, 1 or 2)")]
pub struct InvalidPriorityError(pub i64);

impl Priority {
    pub fn as_i64(self) -> i64 {
        match self {
            Self::Important => 0,
            Self::Default => 1,
            Self::Unimportant => 2,
            Self::Hidden => -1,
        }
    }

    pub fn is_hidden(self) -> bool {
        self == Self::Hidden
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Important => "important",
                Self::Default => "default",
                Self::Unimportant => "unimportant",
                Self::Hidden => "hidden",
            }
        )
    }
}

impl TryFrom<i64> for Priority {
    type Error = InvalidPriorityError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Important),
            1 => Ok(Self::Default),
            2 => Ok(Self::Unimportant),
            -1 => Ok(Self::Hidden),
            other => Err(InvalidPriorityError(other)),
        }
    }
}

/// A documented object (module, function, class...) as recorded in the object table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolRef {
    pub prefix: String, // Enclosing namespace, empty for top-level objects
    pub name: String,   // Name relative to `prefix`
    pub type_code: u32,
    pub kind: ObjectKind,
    pub priority: Priority,
    pub anchor: String, // Raw anchor: "" means the full name, "-" means "<role>-<full name>"
}

impl SymbolRef {
    pub fn full_name(&self) -> String {
        if self.prefix.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.prefix, self.name)
        }
    }

    /// The last dotted component of the full name.
    pub fn short_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    pub fn resolved_anchor(&self, role: &str) -> String {
        match self.anchor.as_str() {
            "" => self.full_name(),
            "-" => format!("{}-{}", role, self.full_name()),
            anchor => anchor.to_string(),
        }
    }
}

/// A documented object together with the document that defines it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectEntry {
    pub doc: DocId,
    pub symbol: SymbolRef,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol(prefix: &str, name: &str, anchor: &str) -> SymbolRef {
        SymbolRef {
            prefix: prefix.to_string(),
            name: name.to_string(),
            type_code: 1,
            kind: ObjectKind::Function,
            priority: Priority::Default,
            anchor: anchor.to_string(),
        }
    }

    #[test]
    fn from_role_maps_known_python_roles() {
        assert_eq!(ObjectKind::from_role("module"), ObjectKind::Module);
        assert_eq!(ObjectKind::from_role("function"), ObjectKind::Function);
        assert_eq!(ObjectKind::from_role("staticmethod"), ObjectKind::Method);
        assert_eq!(ObjectKind::from_role("exception"), ObjectKind::Exception);
        assert_eq!(ObjectKind::from_role(" data "), ObjectKind::Data);
    }

    #[test]
    fn from_role_falls_back_to_other() {
        assert_eq!(ObjectKind::from_role("label"), ObjectKind::Other);
        assert_eq!(ObjectKind::from_role(""), ObjectKind::Other);
    }

    #[test]
    fn priority_conversion_accepts_only_sphinx_values() {
        assert_eq!(Priority::try_from(0), Ok(Priority::Important));
        assert_eq!(Priority::try_from(1), Ok(Priority::Default));
        assert_eq!(Priority::try_from(2), Ok(Priority::Unimportant));
        assert_eq!(Priority::try_from(-1), Ok(Priority::Hidden));
        assert_eq!(Priority::try_from(3), Err(InvalidPriorityError(3)));
        assert_eq!(Priority::Hidden.as_i64(), -1);
        assert_eq!(Priority::Unimportant.to_string(), "unimportant");
    }

    #[test]
    fn priority_orders_important_first_and_hidden_last() {
        assert!(Priority::Important < Priority::Default);
        assert!(Priority::Unimportant < Priority::Hidden);
    }

    #[test]
    fn ensure_reuses_existing_codes_and_appends_new_ones() {
        let mut table = ObjectTypeTable::new();
        table.insert(0, ObjectType::new("py", "module", "Python module"));
        table.insert(1, ObjectType::new("py", "function", "Python function"));

        assert_eq!(table.ensure("py", "function", "Python function"), 1);
        assert_eq!(table.ensure("py", "class", "Python class"), 2);
        assert_eq!(table.get(2).unwrap().kind, ObjectKind::Class);
        assert_eq!(table.get(2).unwrap().qualified_role(), "py:class");
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn full_and_short_names_join_the_prefix() {
        let nested = symbol("pyrexMD.core", "iColor.get_color_scheme", "");
        assert_eq!(nested.full_name(), "pyrexMD.core.iColor.get_color_scheme");
        assert_eq!(nested.short_name(), "get_color_scheme");

        let top_level = symbol("", "pyrexMD", "");
        assert_eq!(top_level.full_name(), "pyrexMD");
        assert_eq!(top_level.short_name(), "pyrexMD");
    }

    #[test]
    fn resolved_anchor_follows_sphinx_conventions() {
        assert_eq!(
            symbol("pyrexMD.gmx", "grompp", "").resolved_anchor("function"),
            "pyrexMD.gmx.grompp"
        );
        assert_eq!(
            symbol("pyrexMD.analysis", "gdt", "-").resolved_anchor("module"),
            "module-pyrexMD.analysis.gdt"
        );
        assert_eq!(
            symbol("pyrexMD", "misc", "custom-anchor").resolved_anchor("module"),
            "custom-anchor"
        );
    }
}
