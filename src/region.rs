//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! Mapping from OCI region identifiers to Database service endpoints.

use crate::error::DatabaseError;
use tracing::debug;

/// An OCI region, resolvable to a Database service endpoint via the
/// standard template `https://database.{region}.{secondLevelDomain}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    region_id: String,
    second_level_domain: &'static str,
}

// Realm second-level domains.
const OC1_SLD: &str = "oraclecloud.com";
const OC2_SLD: &str = "oraclegovcloud.com";
const OC3_SLD: &str = "oraclegovcloud.com";
const OC4_SLD: &str = "oraclegovcloud.uk";
const OC8_SLD: &str = "oraclecloud8.com";

// Known regions and their realms. New regions not yet in this table
// resolve against the commercial realm, so they work without an SDK
// update.
const KNOWN_REGIONS: [(&str, &str); 28] = [
    // OC1 (commercial)
    ("ap-chuncheon-1", OC1_SLD),
    ("ap-hyderabad-1", OC1_SLD),
    ("ap-melbourne-1", OC1_SLD),
    ("ap-mumbai-1", OC1_SLD),
    ("ap-osaka-1", OC1_SLD),
    ("ap-seoul-1", OC1_SLD),
    ("ap-sydney-1", OC1_SLD),
    ("ap-tokyo-1", OC1_SLD),
    ("ca-montreal-1", OC1_SLD),
    ("ca-toronto-1", OC1_SLD),
    ("eu-amsterdam-1", OC1_SLD),
    ("eu-frankfurt-1", OC1_SLD),
    ("eu-zurich-1", OC1_SLD),
    ("me-dubai-1", OC1_SLD),
    ("me-jeddah-1", OC1_SLD),
    ("sa-santiago-1", OC1_SLD),
    ("sa-saopaulo-1", OC1_SLD),
    ("uk-cardiff-1", OC1_SLD),
    ("uk-london-1", OC1_SLD),
    ("us-ashburn-1", OC1_SLD),
    ("us-phoenix-1", OC1_SLD),
    ("us-sanjose-1", OC1_SLD),
    // OC2 / OC3 (US government)
    ("us-langley-1", OC2_SLD),
    ("us-luke-1", OC2_SLD),
    ("us-gov-ashburn-1", OC3_SLD),
    ("us-gov-chicago-1", OC3_SLD),
    // OC4 (UK government)
    ("uk-gov-london-1", OC4_SLD),
    // OC8 (dedicated)
    ("ap-chiyoda-1", OC8_SLD),
];

impl Region {
    /// The region identifier, e.g. `us-ashburn-1`.
    pub fn region_id(&self) -> &str {
        &self.region_id
    }

    /// The Database service endpoint for this region.
    pub fn database_endpoint(&self) -> String {
        format!("https://database.{}.{}", self.region_id, self.second_level_domain)
    }
}

/// Resolve a region identifier string to a [`Region`].
///
/// Identifiers are matched case-insensitively against the internal region
/// table. Unknown identifiers are accepted and resolved against the
/// commercial realm, so a region newer than this SDK still gets a usable
/// endpoint.
pub fn string_to_region(region_id: &str) -> Result<Region, DatabaseError> {
    let id = region_id.trim().to_lowercase();
    if id.is_empty() {
        return crate::error::validation_err!("region id must be non-empty");
    }
    for (known, sld) in KNOWN_REGIONS {
        if known == id {
            return Ok(Region {
                region_id: id,
                second_level_domain: sld,
            });
        }
    }
    debug!("region '{}' not in the known region table, assuming commercial realm", id);
    Ok(Region {
        region_id: id,
        second_level_domain: OC1_SLD,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commercial_region_endpoint() {
        let r = string_to_region("us-phoenix-1").unwrap();
        assert_eq!(
            r.database_endpoint(),
            "https://database.us-phoenix-1.oraclecloud.com"
        );
    }

    #[test]
    fn gov_region_endpoint() {
        let r = string_to_region("us-gov-ashburn-1").unwrap();
        assert_eq!(
            r.database_endpoint(),
            "https://database.us-gov-ashburn-1.oraclegovcloud.com"
        );
    }

    #[test]
    fn unknown_region_falls_back_to_commercial_realm() {
        let r = string_to_region("eu-madrid-99").unwrap();
        assert_eq!(
            r.database_endpoint(),
            "https://database.eu-madrid-99.oraclecloud.com"
        );
    }

    #[test]
    fn region_id_is_normalized() {
        let r = string_to_region("  US-ASHBURN-1 ").unwrap();
        assert_eq!(r.region_id(), "us-ashburn-1");
    }

    #[test]
    fn empty_region_is_rejected() {
        assert!(string_to_region("").is_err());
    }
}
