//! Record fixtures shared by the integration tests.

#![allow(dead_code)]

use rowbind::record;

// ── Scenario: Derived embeds Base ────────────────────────────────

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Base {
    pub id: i64,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Derived {
    pub base: Base,
    pub name: String,
}

record!(Base { column id: i64 = "id" });
record!(Derived {
    embed base: Base,
    column name: String = "name",
});

// ── Flat ──────────────────────────────────────────────────────────

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Flat {
    pub id: i64,
    pub title: String,
    pub score: f64,
    pub note: Option<String>,
}

record!(Flat {
    column id: i64 = "id,pk",
    column title: String,
    column score: f64 = "rating",
    column note: Option<String>,
});

// ── Shadowing ─────────────────────────────────────────────────────

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Inner {
    pub x: i64,
    pub z: i64,
}

record!(Inner {
    column x: i64,
    column z: i64,
});

/// Root-level `x` declared after the embed.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct OuterAfter {
    pub inner: Inner,
    pub x: i64,
}

record!(OuterAfter {
    embed inner: Inner,
    column x: i64,
});

/// Root-level `x` declared before the embed.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct OuterBefore {
    pub x: i64,
    pub inner: Inner,
}

record!(OuterBefore {
    column x: i64,
    embed inner: Inner,
});

// ── Ambiguity ─────────────────────────────────────────────────────

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Left {
    pub y: i64,
    pub a: i64,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Right {
    pub y: i64,
    pub b: i64,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Both {
    pub left: Left,
    pub right: Right,
}

record!(Left {
    column y: i64,
    column a: i64,
});
record!(Right {
    column y: i64,
    column b: i64,
});
record!(Both {
    embed left: Left,
    embed right: Right,
});

// ── Explicit tag precedence ───────────────────────────────────────

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Titled {
    pub label: String,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Doc {
    pub titled: Titled,
    pub title: String,
}

record!(Titled { column label: String = "title" });
record!(Doc {
    embed titled: Titled,
    column title: String,
});

/// A tagged and an untagged `k` at the same depth.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TaggedK {
    pub k: i64,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct PlainK {
    pub k: i64,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct KTie {
    pub plain: PlainK,
    pub tagged: TaggedK,
}

record!(TaggedK { column k: i64 = "k" });
record!(PlainK { column k: i64 });
record!(KTie {
    embed plain: PlainK,
    embed tagged: TaggedK,
});

/// Tagged `key` at depth 1 and depth 2.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DeepKey {
    pub v: i64,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ShallowKey {
    pub deep: DeepKey,
    pub w: i64,
}

record!(DeepKey { column v: i64 = "key" });
record!(ShallowKey {
    embed deep: DeepKey,
    column w: i64 = "key",
});

/// Two tagged `dup` fields at the same depth.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DupA {
    pub p: i64,
    pub a: i64,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct DupB {
    pub q: i64,
    pub b: i64,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct DupClash {
    pub first: DupA,
    pub second: DupB,
}

record!(DupA {
    column p: i64 = "dup",
    column a: i64,
});
record!(DupB {
    column q: i64 = "dup",
    column b: i64,
});
record!(DupClash {
    embed first: DupA,
    embed second: DupB,
});

// ── Diamond: Shared reached through both arms ────────────────────

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Shared {
    pub sid: i64,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct LeftArm {
    pub shared: Shared,
    pub l: i64,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RightArm {
    pub shared: Shared,
    pub r: i64,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Diamond {
    pub left: LeftArm,
    pub right: RightArm,
}

record!(Shared { column sid: i64 });
record!(LeftArm {
    embed shared: Shared,
    column l: i64,
});
record!(RightArm {
    embed shared: Shared,
    column r: i64,
});
record!(Diamond {
    embed left: LeftArm,
    embed right: RightArm,
});

// ── Exclusion, private fields, tagged embeds, boxed embeds ────────

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Account {
    pub cache: u32,
    pub id: i64,
    pub password: String,
    pub base: Base,
}

record!(Account {
    private cache: u32,
    column id: i64 = "account_id",
    column password: String = "-",
    embed base: Base = "-",
});

#[derive(Debug, Default, Clone, PartialEq)]
pub struct TaggedEmbed {
    pub base: Base,
    pub name: String,
}

record!(TaggedEmbed {
    embed base: Base = "base",
    column name: String,
});

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Boxed {
    pub base: Box<Base>,
    pub n: i64,
}

record!(Boxed {
    embed base: Box<Base>,
    column n: i64,
});

/// Embeds itself through a box.
pub struct Node {
    pub id: i64,
    pub parent: Box<Node>,
}

record!(Node {
    column id: i64,
    embed parent: Box<Node>,
});

// ── Deep nesting ──────────────────────────────────────────────────

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Audit {
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Entity {
    pub audit: Audit,
    pub id: i64,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Customer {
    pub entity: Entity,
    pub name: String,
    pub email: Option<String>,
    pub active: bool,
}

record!(Audit {
    column created_at: i64,
    column updated_at: i64,
});
record!(Entity {
    embed audit: Audit,
    column id: i64,
});
record!(Customer {
    embed entity: Entity,
    column name: String = "name",
    column email: Option<String>,
    column active: bool = "is_active",
});
