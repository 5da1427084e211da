//! Coordinate, riquadro mappa e messaggi di stato GPS
//!
//! Le coordinate viaggiano come testo nel formato "lat lon" con la
//! virgola come separatore decimale (es. "45,43306076 11,11554812"),
//! lo stesso usato nei registri delle località.

use crate::error::{Error, Result};

/// Margine del riquadro di anteprima attorno al punto, in gradi
pub const PREVIEW_MARGIN_DEG: f64 = 0.01;

/// Soglia oltre la quale la precisione GPS è considerata bassa, in metri
pub const LOW_ACCURACY_THRESHOLD_M: f64 = 100.0;

/// Stato mostrato durante l'acquisizione
pub const GPS_ACQUIRING: &str = "Acquisizione della posizione in corso...";

/// Stato quando la posizione non è ottenibile
pub const GPS_UNAVAILABLE: &str =
    "Posizione non disponibile - Prova a utilizzare un dispositivo mobile per una migliore precisione";

/// Stato quando il dispositivo non espone la geolocalizzazione
pub const GPS_UNSUPPORTED: &str = "Il tuo dispositivo non supporta la geolocalizzazione";

/// Punto geografico in gradi decimali
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Riquadro geografico per l'anteprima mappa
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Riquadro di ±0,01° attorno al punto.
    pub fn around(point: GeoPoint) -> Self {
        Self {
            min_lon: point.lon - PREVIEW_MARGIN_DEG,
            min_lat: point.lat - PREVIEW_MARGIN_DEG,
            max_lon: point.lon + PREVIEW_MARGIN_DEG,
            max_lat: point.lat + PREVIEW_MARGIN_DEG,
        }
    }
}

/// Interpreta una stringa "lat lon" con virgola decimale.
///
/// Nessuna validazione di intervallo (-90..90, -180..180): un valore
/// fuori scala produce un'anteprima senza senso, non un errore.
pub fn parse_coordinates(text: &str) -> Result<GeoPoint> {
    let mut parts = text.split_whitespace();

    let lat = parts
        .next()
        .ok_or_else(|| Error::Coordinate(format!("attese due componenti in \"{}\"", text)))?;
    let lon = parts
        .next()
        .ok_or_else(|| Error::Coordinate(format!("attese due componenti in \"{}\"", text)))?;

    Ok(GeoPoint {
        lat: parse_decimal(lat)?,
        lon: parse_decimal(lon)?,
    })
}

fn parse_decimal(text: &str) -> Result<f64> {
    text.replace(',', ".")
        .parse()
        .map_err(|_| Error::Coordinate(format!("valore non numerico: \"{}\"", text)))
}

/// Formatta una coppia lat/lon a 8 decimali con la virgola come
/// separatore, nello stesso formato accettato da [`parse_coordinates`].
pub fn format_coordinates(lat: f64, lon: f64) -> String {
    let lat = format!("{:.8}", lat).replace('.', ",");
    let lon = format!("{:.8}", lon).replace('.', ",");
    format!("{} {}", lat, lon)
}

/// URL dell'embed OpenStreetMap per il riquadro dato, con segnaposto
/// sul punto del ritrovamento.
pub fn osm_embed_url(bbox: BoundingBox, marker: GeoPoint) -> String {
    format!(
        "https://www.openstreetmap.org/export/embed.html?bbox={},{},{},{}&layer=mapnik&marker={},{}",
        bbox.min_lon, bbox.min_lat, bbox.max_lon, bbox.max_lat, marker.lat, marker.lon
    )
}

/// Messaggio di stato dopo un'acquisizione riuscita. La precisione viene
/// arrotondata al metro; oltre la soglia si segnala la variante a bassa
/// precisione.
pub fn gps_status(accuracy_m: f64) -> String {
    let accuracy = accuracy_m.round() as i64;
    if accuracy as f64 > LOW_ACCURACY_THRESHOLD_M {
        format!(
            "Posizione acquisita (precisione: {}m - Precisione bassa, tipica del Mac)",
            accuracy
        )
    } else {
        format!("Posizione acquisita (precisione: {}m)", accuracy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinates_comma_decimal() {
        let point = parse_coordinates("45,43306076 11,11554812").expect("parse fallito");
        assert_eq!(point.lat, 45.43306076);
        assert_eq!(point.lon, 11.11554812);
    }

    #[test]
    fn test_parse_coordinates_accepts_period_decimal() {
        let point = parse_coordinates("45.83 6.86").expect("parse fallito");
        assert_eq!(point.lat, 45.83);
        assert_eq!(point.lon, 6.86);
    }

    #[test]
    fn test_parse_coordinates_missing_component() {
        assert!(parse_coordinates("45,83").is_err());
        assert!(parse_coordinates("").is_err());
    }

    #[test]
    fn test_parse_coordinates_non_numeric() {
        let result = parse_coordinates("nord sud");
        match result {
            Err(Error::Coordinate(message)) => assert!(message.contains("nord")),
            other => panic!("atteso errore di coordinate, trovato {:?}", other),
        }
    }

    #[test]
    fn test_parse_coordinates_out_of_range_is_not_an_error() {
        // nessuna validazione di intervallo
        let point = parse_coordinates("1000,0 -2000,0").expect("parse fallito");
        assert_eq!(point.lat, 1000.0);
        assert_eq!(point.lon, -2000.0);
    }

    #[test]
    fn test_format_coordinates_eight_decimals_comma() {
        let text = format_coordinates(45.43306076, 11.11554812);
        assert_eq!(text, "45,43306076 11,11554812");
    }

    #[test]
    fn test_format_parse_roundtrip() {
        let text = format_coordinates(45.83, 6.86);
        let point = parse_coordinates(&text).expect("parse fallito");
        assert!((point.lat - 45.83).abs() < 1e-8);
        assert!((point.lon - 6.86).abs() < 1e-8);
    }

    #[test]
    fn test_bounding_box_around_point() {
        let bbox = BoundingBox::around(GeoPoint { lat: 45.0, lon: 7.0 });
        assert!((bbox.min_lon - 6.99).abs() < 1e-9);
        assert!((bbox.min_lat - 44.99).abs() < 1e-9);
        assert!((bbox.max_lon - 7.01).abs() < 1e-9);
        assert!((bbox.max_lat - 45.01).abs() < 1e-9);
    }

    #[test]
    fn test_osm_embed_url() {
        let marker = GeoPoint { lat: 45.0, lon: 7.0 };
        let url = osm_embed_url(BoundingBox::around(marker), marker);
        assert!(url.starts_with("https://www.openstreetmap.org/export/embed.html?bbox="));
        // ordine bbox: lon minima, lat minima, lon massima, lat massima
        assert!(url.contains("bbox=6.99,44.99,7.01,45.01"));
        assert!(url.contains("&layer=mapnik"));
        assert!(url.contains("&marker=45,7"));
    }

    #[test]
    fn test_gps_status_normal_accuracy() {
        assert_eq!(gps_status(12.4), "Posizione acquisita (precisione: 12m)");
        assert_eq!(gps_status(100.0), "Posizione acquisita (precisione: 100m)");
    }

    #[test]
    fn test_gps_status_low_accuracy() {
        let status = gps_status(650.7);
        assert_eq!(
            status,
            "Posizione acquisita (precisione: 651m - Precisione bassa, tipica del Mac)"
        );
    }

    #[test]
    fn test_gps_status_threshold_uses_rounded_value() {
        // 100,4 m arrotonda a 100: ancora dentro la soglia
        assert_eq!(gps_status(100.4), "Posizione acquisita (precisione: 100m)");
        // 100,6 m arrotonda a 101: variante a bassa precisione
        assert!(gps_status(100.6).contains("Precisione bassa"));
    }
}
