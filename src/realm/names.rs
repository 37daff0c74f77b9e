//! Realm display names, one per geometry variant.

use crate::geometry::VARIANT_COUNT;

/// Ordered to match `geometry::VARIANTS`; the array length ties both tables
/// to `VARIANT_COUNT`.
pub const REALM_NAMES: [&str; VARIANT_COUNT] = [
    "TORUS_KNOT",
    "LOG_SPIRAL",
    "DNA_HELIX",
    "WAVE_GRID",
    "FIBONACCI_SPHERE",
    "PHYLLOTAXIS",
    "LIGHT_CYLINDER",
    "TWIN_PLANES",
    "VORTEX_COIL",
    "CRYSTAL_LATTICE",
    "TORUS_FIELD",
    "BUBBLE_CLOUD",
    "PULSE_SPHERE",
    "WARP_TUNNEL",
    "DATA_COLUMNS",
    "STAR_FIELD",
    "SPIRAL_TOWER",
    "PLASMA_GLOBE",
    "EIGHT_BRANCH",
    "TERRAIN_MESH",
    "NODE_NETWORK",
    "TESSERACT",
    "OCEAN_WAVES",
    "MOBIUS_STRIP",
    "SPIRAL_GALAXY",
    "SATURN_RING",
    "CRYSTAL_CAVE",
    "NEURAL_NET",
    "HOURGLASS_VORTEX",
    "LASER_GRID",
    "ELECTRON_ORBITAL",
    "WORMHOLE",
    "PRISM_SPECTRUM",
    "SONIC_SPHERE",
    "STORM_EYE",
    "BYTE_STREAM",
    "FORCE_FIELD",
    "DIMENSIONAL_RIFT",
    "SINGULARITY",
    "PHOTON_BURST",
    "LOTUS_BLOOM",
    "VOID_SHELL",
    "PULSE_RINGS",
    "MANDALA",
    "BEAM_ARRAY",
    "CRYSTAL_SPIRE",
    "GRAVITY_WELL",
    "LIGHTNING_CELLS",
    "STARGATE",
    "HOLO_DECK",
    "FLUX_FIELD",
    "SUPERNOVA",
    "CODE_HELIX",
    "VOID_RING",
    "PULSE_CUBE",
    "WARP_SPHERE",
    "SPIDER_WEB",
    "TUBE_SEGMENTS",
    "CYBER_CYCLONE",
    "ATOM_CORE",
    "LIGHT_FUNNEL",
    "FRACTAL_RINGS",
    "SONIC_RING",
    "DATA_SPIRAL",
    "NEON_SPHERE",
    "QUANTUM_FOAM",
    "EVENT_GATE",
];

/// Name shown before any track has been selected
pub const IDLE_REALM_NAME: &str = "VOID_CLOUD";
