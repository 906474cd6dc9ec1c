use crate::style::{line_look, marker_look, popup, uses_air_palette};
use crate::{Backend, MapRenderer, RenderPlan};
use carrier_geo::Coordinate;
use carrier_view::{DisplayGeometry, Viewport};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::str::FromStr;

// Vector tiles are 512px, so the same framing sits half a zoom level lower.
const TILE_ZOOM_OFFSET: f64 = -0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Projection {
    #[default]
    Mercator,
    Globe,
}

impl FromStr for Projection {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "mercator" | "flat" | "2d" => Ok(Self::Mercator),
            "globe" | "3d" => Ok(Self::Globe),
            _ => Err(()),
        }
    }
}

/// WebGL vector-tile maps; geometry goes in as GeoJSON sources.
#[derive(Debug, Clone, Copy, Default)]
pub struct MapboxRenderer {
    projection: Projection,
}

impl MapboxRenderer {
    pub fn new(projection: Projection) -> Self {
        Self { projection }
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }
}

fn lnglat(coord: Coordinate) -> Value {
    json!([coord.lng, coord.lat])
}

impl MapRenderer for MapboxRenderer {
    fn backend(&self) -> Backend {
        Backend::Mapbox
    }

    fn render(&self, geometry: &DisplayGeometry) -> RenderPlan {
        let mut commands = vec![
            json!({ "op": "clear" }),
            json!({ "op": "setProjection", "projection": self.projection }),
        ];

        for (index, line) in geometry.polylines.iter().enumerate() {
            let look = line_look(line.style);
            let source = json!({
                "type": "geojson",
                "data": {
                    "type": "Feature",
                    "properties": { "style": line.style },
                    "geometry": {
                        "type": "LineString",
                        "coordinates": line.points.iter().copied().map(lnglat).collect::<Vec<_>>(),
                    },
                },
            });
            let mut paint = json!({
                "line-color": look.color,
                "line-width": look.weight,
                "line-opacity": look.opacity,
            });
            if look.dashed {
                paint["line-dasharray"] = json!([2, 2]);
            }
            commands.push(json!({
                "op": "addLine",
                "layer": "route",
                "id": format!("route-{index}"),
                "source": source,
                "layout": { "line-cap": "round", "line-join": "round" },
                "paint": paint,
            }));
        }

        let air_palette = uses_air_palette(geometry);
        for marker in &geometry.markers {
            let look = marker_look(marker, air_palette);
            commands.push(json!({
                "op": "addMarker",
                "layer": "marker",
                "lngLat": lnglat(marker.position),
                "element": {
                    "kind": look.icon,
                    "color": look.color,
                    "size": look.size,
                    "zIndex": look.z_boost,
                },
                "popup": popup(marker),
            }));
        }

        commands.push(match geometry.viewport {
            Viewport::Center { center, zoom } => json!({
                "op": "flyTo",
                "center": lnglat(center),
                "zoom": zoom + TILE_ZOOM_OFFSET,
            }),
            Viewport::FitBounds {
                bounds,
                padding_px,
                max_zoom,
            } => json!({
                "op": "fitBounds",
                "bounds": [lnglat(bounds.south_west()), lnglat(bounds.north_east())],
                "options": { "padding": padding_px, "maxZoom": max_zoom },
            }),
        });

        RenderPlan {
            backend: Backend::Mapbox,
            commands,
        }
    }
}
