//! Node material codes

use std::fmt;

/// Name emitted for codes outside the material table.
pub const UNKNOWN_MATERIAL: &str = "UNKNOWN";

/// Surface material of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Material {
    Air = 0,
    Ground = 1,
    Water = 2,
    Wood = 3,
    Carton = 4,
    StrongMetal = 5,
    NormalMetal = 6,
    SoftMetal = 7,
    Flesh = 8,
    BloodyFlesh = 9,
    Textiles = 10,
    Concrete = 11,
    Runway = 12,
    Rug = 13,
    Glass = 14,
    Plastic = 15,
    Porcelain = 16,
    Rubber = 17,
    Fence = 18,
    Gravel = 19,
    Snow = 20,
    HumanCollision = 21,
    MetalLadder = 22,
    MetalFence = 23,
}

impl Material {
    /// Every material, indexed by code.
    pub const ALL: [Material; 24] = [
        Material::Air,
        Material::Ground,
        Material::Water,
        Material::Wood,
        Material::Carton,
        Material::StrongMetal,
        Material::NormalMetal,
        Material::SoftMetal,
        Material::Flesh,
        Material::BloodyFlesh,
        Material::Textiles,
        Material::Concrete,
        Material::Runway,
        Material::Rug,
        Material::Glass,
        Material::Plastic,
        Material::Porcelain,
        Material::Rubber,
        Material::Fence,
        Material::Gravel,
        Material::Snow,
        Material::HumanCollision,
        Material::MetalLadder,
        Material::MetalFence,
    ];

    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn from_code(code: u64) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Material::Air => "Air",
            Material::Ground => "Ground",
            Material::Water => "Water",
            Material::Wood => "Wood",
            Material::Carton => "Carton",
            Material::StrongMetal => "StrongMetal",
            Material::NormalMetal => "NormalMetal",
            Material::SoftMetal => "SoftMetal",
            Material::Flesh => "Flesh",
            Material::BloodyFlesh => "BloodyFlesh",
            Material::Textiles => "Textiles",
            Material::Concrete => "Concrete",
            Material::Runway => "Runway",
            Material::Rug => "Rug",
            Material::Glass => "Glass",
            Material::Plastic => "Plastic",
            Material::Porcelain => "Porcelain",
            Material::Rubber => "Rubber",
            Material::Fence => "Fence",
            Material::Gravel => "Gravel",
            Material::Snow => "Snow",
            Material::HumanCollision => "HumanCollision",
            Material::MetalLadder => "MetalLadder",
            Material::MetalFence => "MetalFence",
        }
    }
}

// ALL must stay indexed by code for from_code.
const _: () = {
    let mut i = 0;
    while i < Material::ALL.len() {
        assert!(Material::ALL[i] as usize == i);
        i += 1;
    }
};

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Material name for a raw code, or [`UNKNOWN_MATERIAL`].
#[must_use]
pub fn material_name(code: u64) -> &'static str {
    Material::from_code(code).map_or(UNKNOWN_MATERIAL, Material::name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(material_name(0), "Air");
        assert_eq!(material_name(5), "StrongMetal");
        assert_eq!(material_name(23), "MetalFence");
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(material_name(24), UNKNOWN_MATERIAL);
        assert_eq!(material_name(99), "UNKNOWN");
        assert_eq!(material_name(u64::MAX), "UNKNOWN");
    }

    #[test]
    fn test_round_trip_codes() {
        for m in Material::ALL {
            assert_eq!(Material::from_code(u64::from(m.code())), Some(m));
        }
    }
}
