use crate::ModelType;

/// Anything that can be persisted as (part of) an entity document.
///
/// Identity is the `id` string plus the concrete type: two entities of
/// different types may share an id and remain distinct. Ids are assigned by
/// the application and immutable once set; an entity with an empty id cannot
/// be written to an archive.
pub trait Entity {
    fn id(&self) -> &str;
}

/// An independently addressable entity.
///
/// Root entities are stored as their own archive document at
/// `TYPE.dir()/id.json`; other entities hold lightweight references to them
/// instead of embedding them. The associated [`ModelType`] makes the
/// type→category mapping total over all root entity types at compile time —
/// a new root entity type cannot exist without declaring its category.
pub trait RootEntity: Entity {
    const TYPE: ModelType;

    fn name(&self) -> Option<&str>;

    fn description(&self) -> Option<&str>;
}

/// A root entity shipped as application reference data.
///
/// The protection flag is advisory: the persistence core stores it but does
/// not enforce it. Surrounding applications use it to keep users from
/// silently overwriting catalog data.
pub trait BaseDataEntity: RootEntity {
    fn is_protected(&self) -> bool;
}

/// Mint a fresh process-unique entity id (UUID v7, time-ordered).
pub(crate) fn new_id() -> String {
    uuid::Uuid::now_v7().to_string()
}
