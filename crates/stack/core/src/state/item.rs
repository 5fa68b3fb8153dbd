use super::ids::{ContainerId, ItemId, ItemTypeId};

/// What a container slot physically holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContentsType {
    #[default]
    Generic,
    Liquid,
}

/// Static description of an item type.
///
/// `stackable` is the engine-native per-slot limit before any container
/// multiplier is applied.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub item_type: ItemTypeId,
    pub shortname: String,
    pub stackable: u32,
    pub contents: ContentsType,
}

impl ItemDefinition {
    pub fn new(item_type: ItemTypeId, shortname: impl Into<String>, stackable: u32) -> Self {
        Self {
            item_type,
            shortname: shortname.into(),
            stackable: stackable.max(1),
            contents: ContentsType::Generic,
        }
    }

    pub fn liquid(mut self) -> Self {
        self.contents = ContentsType::Liquid;
        self
    }

    /// Items with a native limit of one never stack, so no multiplier applies.
    pub fn is_stackable(&self) -> bool {
        self.stackable > 1
    }
}

/// One physical stack of items.
///
/// `amount` is at least one while the stack exists. `parent` and `slot` are
/// set together when the stack sits in a container.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStack {
    pub id: ItemId,
    pub definition: ItemDefinition,
    pub amount: u32,
    pub parent: Option<ContainerId>,
    pub slot: Option<usize>,
}

impl ItemStack {
    pub fn new(id: ItemId, definition: ItemDefinition, amount: u32) -> Self {
        Self {
            id,
            definition,
            amount,
            parent: None,
            slot: None,
        }
    }

    /// Native per-slot limit of this stack's item type.
    #[inline]
    pub fn base_limit(&self) -> u32 {
        self.definition.stackable
    }

    /// Returns true when this stack holds more than its native limit.
    pub fn is_overstacked(&self) -> bool {
        self.amount > self.base_limit()
    }

    /// Returns true when the two stacks may merge into one slot.
    pub fn can_stack(&self, other: &ItemStack) -> bool {
        self.id != other.id
            && self.definition.item_type == other.definition.item_type
            && self.definition.is_stackable()
    }
}
