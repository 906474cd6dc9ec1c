use crate::style::{line_look, marker_look, popup, uses_air_palette};
use crate::{Backend, MapRenderer, RenderPlan};
use carrier_geo::Coordinate;
use carrier_view::{DisplayGeometry, Viewport};
use serde_json::{json, Value};

/// Proprietary maps platform with overlay objects.
///
/// `fitBounds` there takes no zoom ceiling, so bounds fits are followed by a
/// `capZoom` command the client applies once the fit settles.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoogleMapsRenderer;

fn literal(coord: Coordinate) -> Value {
    json!({ "lat": coord.lat, "lng": coord.lng })
}

impl MapRenderer for GoogleMapsRenderer {
    fn backend(&self) -> Backend {
        Backend::GoogleMaps
    }

    fn render(&self, geometry: &DisplayGeometry) -> RenderPlan {
        let mut commands = vec![json!({ "op": "clearOverlays" })];

        for line in &geometry.polylines {
            let look = line_look(line.style);
            let path: Vec<Value> = line.points.iter().copied().map(literal).collect();
            let mut options = json!({
                "path": path,
                "geodesic": false,
                "strokeColor": look.color,
                "strokeWeight": look.weight,
                "strokeOpacity": look.opacity,
            });
            // Dashes are drawn as repeated symbols over an invisible stroke.
            if look.dashed {
                options["strokeOpacity"] = json!(0.0);
                options["icons"] = json!([{
                    "icon": { "path": "M 0,-1 0,1", "strokeOpacity": look.opacity, "scale": look.weight },
                    "offset": "0",
                    "repeat": "20px",
                }]);
            }
            commands.push(json!({
                "op": "polyline",
                "layer": "route",
                "style": line.style,
                "options": options,
            }));
        }

        let air_palette = uses_air_palette(geometry);
        for marker in &geometry.markers {
            let look = marker_look(marker, air_palette);
            commands.push(json!({
                "op": "marker",
                "layer": "marker",
                "position": literal(marker.position),
                "icon": { "kind": look.icon, "fillColor": look.color, "size": look.size },
                "zIndex": look.z_boost,
                "info": popup(marker),
            }));
        }

        match geometry.viewport {
            Viewport::Center { center, zoom } => {
                commands.push(json!({ "op": "setCenter", "center": literal(center) }));
                commands.push(json!({ "op": "setZoom", "zoom": zoom }));
            }
            Viewport::FitBounds {
                bounds,
                padding_px,
                max_zoom,
            } => {
                commands.push(json!({
                    "op": "fitBounds",
                    "bounds": {
                        "south": bounds.south,
                        "west": bounds.west,
                        "north": bounds.north,
                        "east": bounds.east,
                    },
                    "padding": padding_px,
                }));
                commands.push(json!({ "op": "capZoom", "maxZoom": max_zoom }));
            }
        }

        RenderPlan {
            backend: Backend::GoogleMaps,
            commands,
        }
    }
}
