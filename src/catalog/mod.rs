//! Immutable reference data: locations, connections, tiles, cards,
//! constants, and the lookup facade the rules consume.

pub mod cards;
pub mod connections;
pub mod constants;
pub mod locations;
pub mod tiles;

use im::Vector;

use crate::core::{CardId, ConnectionId, Era, Industry, LocationId, TileId};

pub use cards::Card;
pub use connections::Connection;
pub use locations::Location;
pub use tiles::TileSpec;

/// The complete immutable reference data for a game.
///
/// Owned by the engine; all ids in the game state index into these
/// tables. Never mutated after construction.
#[derive(Clone, Debug)]
pub struct Catalog {
    locations: Vec<Location>,
    connections: Vec<Connection>,
    tiles: Vec<TileSpec>,
    cards: Vec<Card>,
}

impl Catalog {
    /// The standard Birmingham board.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            locations: locations::LOCATIONS.to_vec(),
            connections: connections::CONNECTIONS.to_vec(),
            tiles: tiles::all_tiles(),
            cards: cards::all_cards(),
        }
    }

    /// Look up a location, or `None` if the id is out of range.
    #[must_use]
    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.index())
    }

    /// Look up a connection.
    #[must_use]
    pub fn connection(&self, id: ConnectionId) -> Option<&Connection> {
        self.connections.get(id.index())
    }

    /// Look up a tile spec.
    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&TileSpec> {
        self.tiles.get(id.index())
    }

    /// Look up a card.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// Find a location by display name. Test and tooling convenience.
    #[must_use]
    pub fn location_by_name(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.name == name)
    }

    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    #[must_use]
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    #[must_use]
    pub fn tiles(&self) -> &[TileSpec] {
        &self.tiles
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Ids of all cards usable in `era`.
    #[must_use]
    pub fn cards_for_era(&self, era: Era) -> Vec<CardId> {
        self.cards
            .iter()
            .filter(|c| c.era.matches(era))
            .map(|c| c.id)
            .collect()
    }
}

/// Remaining buildable tiles, partitioned by industry and era.
///
/// A fixed-shape table: every (industry, era) pair has a pool, possibly
/// empty, so there is no invalid-key state to handle.
#[derive(Clone, Debug, PartialEq)]
pub struct TilePools {
    pools: [[Vector<TileId>; Era::COUNT]; Industry::COUNT],
}

impl TilePools {
    /// Fill the pools from the full tile catalog.
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut pools: [[Vector<TileId>; Era::COUNT]; Industry::COUNT] = Default::default();
        for tile in catalog.tiles() {
            pools[tile.industry.index()][tile.era.index()].push_back(tile.id);
        }
        Self { pools }
    }

    /// The remaining tiles for an industry in an era.
    #[must_use]
    pub fn available(&self, industry: Industry, era: Era) -> &Vector<TileId> {
        &self.pools[industry.index()][era.index()]
    }

    /// Whether `tile` is still in the pool for (industry, era).
    #[must_use]
    pub fn contains(&self, industry: Industry, era: Era, tile: TileId) -> bool {
        self.available(industry, era).contains(&tile)
    }

    /// Whether `tile` remains in any pool.
    #[must_use]
    pub fn contains_tile(&self, tile: TileId) -> bool {
        self.pools
            .iter()
            .flatten()
            .any(|pool| pool.contains(&tile))
    }

    /// Remove `tile` from its pool. Returns false if it was not there.
    pub fn take(&mut self, industry: Industry, era: Era, tile: TileId) -> bool {
        let pool = &mut self.pools[industry.index()][era.index()];
        match pool.index_of(&tile) {
            Some(pos) => {
                pool.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Total tiles remaining across all pools.
    #[must_use]
    pub fn total_remaining(&self) -> usize {
        self.pools.iter().flatten().map(Vector::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_shape() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.locations().len(), 29);
        assert_eq!(catalog.connections().len(), 51);
        assert_eq!(catalog.tiles().len(), 38);
        assert_eq!(catalog.cards().len(), 102);
    }

    #[test]
    fn test_lookups() {
        let catalog = Catalog::standard();
        assert!(catalog.location(LocationId::new(0)).is_some());
        assert!(catalog.location(LocationId::new(29)).is_none());
        assert!(catalog.location_by_name("Birmingham").is_some());
        assert!(catalog.location_by_name("London").is_none());
    }

    #[test]
    fn test_cards_for_era() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.cards_for_era(Era::Canal).len(), 51);
        assert_eq!(catalog.cards_for_era(Era::Rail).len(), 51);
    }

    #[test]
    fn test_pools_partition_tiles() {
        let catalog = Catalog::standard();
        let pools = TilePools::from_catalog(&catalog);
        assert_eq!(pools.total_remaining(), 38);

        let canal_coal = pools.available(Industry::Coal, Era::Canal);
        assert_eq!(canal_coal.len(), 5);
    }

    #[test]
    fn test_take_removes_exactly_one() {
        let catalog = Catalog::standard();
        let mut pools = TilePools::from_catalog(&catalog);

        let tile = pools.available(Industry::Coal, Era::Canal)[0];
        assert!(pools.contains(Industry::Coal, Era::Canal, tile));
        assert!(pools.take(Industry::Coal, Era::Canal, tile));
        assert!(!pools.contains(Industry::Coal, Era::Canal, tile));
        assert!(!pools.take(Industry::Coal, Era::Canal, tile));
        assert_eq!(pools.total_remaining(), 37);
    }
}
