use crate::style::{line_look, marker_look, popup, uses_air_palette};
use crate::{Backend, MapRenderer, RenderPlan};
use carrier_geo::Coordinate;
use carrier_view::{DisplayGeometry, Polyline, Viewport};
use serde_json::{json, Value};

/// Raster tile maps driven through layer groups.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeafletRenderer;

fn latlng(coord: Coordinate) -> Value {
    json!([coord.lat, coord.lng])
}

fn polyline_commands(line: &Polyline, commands: &mut Vec<Value>) {
    let look = line_look(line.style);
    let latlngs: Vec<Value> = line.points.iter().copied().map(latlng).collect();
    if let Some(shadow) = look.shadow {
        commands.push(json!({
            "op": "polyline",
            "layer": "shadow",
            "group": "routes",
            "latlngs": latlngs,
            "options": { "color": shadow.color, "weight": shadow.weight, "opacity": 1.0 },
        }));
    }
    let mut options = json!({
        "color": look.color,
        "weight": look.weight,
        "opacity": look.opacity,
        "lineCap": "round",
        "lineJoin": "round",
    });
    if look.dashed {
        options["dashArray"] = json!("12, 8");
    }
    commands.push(json!({
        "op": "polyline",
        "layer": "route",
        "group": "routes",
        "style": line.style,
        "latlngs": latlngs,
        "options": options,
    }));
}

impl MapRenderer for LeafletRenderer {
    fn backend(&self) -> Backend {
        Backend::Leaflet
    }

    fn render(&self, geometry: &DisplayGeometry) -> RenderPlan {
        let mut commands = vec![json!({ "op": "clearLayers", "groups": ["markers", "routes"] })];
        for line in &geometry.polylines {
            polyline_commands(line, &mut commands);
        }
        let air_palette = uses_air_palette(geometry);
        for marker in &geometry.markers {
            let look = marker_look(marker, air_palette);
            commands.push(json!({
                "op": "marker",
                "layer": "marker",
                "group": "markers",
                "latlng": latlng(marker.position),
                "icon": {
                    "kind": look.icon,
                    "color": look.color,
                    "iconSize": [look.size, look.size],
                    "iconAnchor": [look.size / 2, look.size / 2],
                },
                "zIndexOffset": look.z_boost,
                "popup": popup(marker),
            }));
        }
        commands.push(match geometry.viewport {
            Viewport::Center { center, zoom } => json!({
                "op": "setView",
                "center": latlng(center),
                "zoom": zoom,
            }),
            Viewport::FitBounds {
                bounds,
                padding_px,
                max_zoom,
            } => json!({
                "op": "fitBounds",
                "bounds": [latlng(bounds.south_west()), latlng(bounds.north_east())],
                "options": { "padding": [padding_px, padding_px], "maxZoom": max_zoom },
            }),
        });
        RenderPlan {
            backend: Backend::Leaflet,
            commands,
        }
    }
}
