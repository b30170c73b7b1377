//! Common test fixtures for earth tests.
//!
//! Pre-defined data mirroring what the globe registers at start-up and the
//! hashes users actually bookmark.

/// Projection names the globe registers.
pub const PROJECTIONS: &[&str] = &[
    "atlantis",
    "azimuthal_equidistant",
    "conic_equidistant",
    "equirectangular",
    "orthographic",
    "stereographic",
    "waterman",
    "winkel3",
];

/// Overlay types the globe registers. `"default"` is accepted by the parser without being listed.
pub const OVERLAYS: &[&str] = &[
    "off",
    "wind",
    "temp",
    "relative_humidity",
    "air_density",
    "wind_power_density",
    "total_precipitable_water",
    "total_cloud_water",
    "mean_sea_level_pressure",
];

/// Sample URL hashes.
pub mod hashes {
    /// The canonical full example.
    pub const FULL: &str =
        "2013/11/14/0900Z/wind/isobaric/1000hPa/orthographic=26.50,-153.00,1430/overlay=off";

    /// Current conditions, no trailing options.
    pub const CURRENT: &str = "current/wind/surface/level";

    /// Current conditions with every trailing option set.
    pub const CURRENT_ALL_OPTIONS: &str =
        "current/wind/surface/level/waterman=-90.00,0.00,250/overlay=temp/grid=on";

    /// Unpadded date components and a three digit hour.
    pub const UNPADDED: &str = "2014/1/2/300Z/temp/isobaric/850hPa";

    /// Shapes that do not match the grammar at all.
    pub const MALFORMED: &[&str] = &[
        "",
        "current",
        "current/wind/surface",
        "now/wind/surface/level",
        "13/11/14/0900Z/wind/isobaric/1000hPa",
        "2013/11/14/0900/wind/isobaric/1000hPa",
        "2013/11/14/09Z/wind/isobaric/1000hPa",
        "2013/111/14/0900Z/wind/isobaric/1000hPa",
        "current/wi-nd/surface/level",
        "/current/wind/surface/level",
    ];
}

/// Sample breakpoint lists, as `(value, [r, g, b])`.
pub mod breakpoints {
    /// Purple to yellow over `[0, 1]`.
    pub const PURPLE_YELLOW: &[(f64, [i32; 3])] = &[(0.0, [128, 0, 128]), (1.0, [255, 255, 0])];

    /// Temperature scale in Kelvin.
    pub const TEMPERATURE: &[(f64, [i32; 3])] = &[
        (193.0, [37, 4, 42]),
        (206.0, [41, 10, 130]),
        (219.0, [81, 40, 40]),
        (233.15, [192, 37, 149]),
        (255.372, [70, 215, 215]),
        (273.15, [21, 84, 187]),
        (275.15, [24, 132, 14]),
        (291.0, [247, 251, 59]),
        (298.0, [235, 167, 21]),
        (311.0, [230, 71, 39]),
        (328.0, [88, 27, 67]),
    ];

    /// Contains a zero-width segment at 0.5.
    pub const ZERO_WIDTH: &[(f64, [i32; 3])] = &[
        (0.0, [0, 0, 0]),
        (0.5, [100, 100, 100]),
        (0.5, [200, 0, 0]),
        (1.0, [255, 255, 255]),
    ];
}
