//! Clients for the two OpenStreetMap services behind a store search:
//! Nominatim for geocoding and Overpass for tagged shop lookups.

pub mod error;
pub mod lookup;
pub mod nominatim;
pub mod overpass;
pub mod types;

pub use error::OsmError;
pub use lookup::{find_second_hand_shops, resolve_city, QueryFailure, StoreQueryResult};
pub use nominatim::NominatimClient;
pub use overpass::{shop_query, OverpassClient, SHOP_TAG_VALUES};
pub use types::{NominatimPlace, OverpassElement, OverpassResponse};
