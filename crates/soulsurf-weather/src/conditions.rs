//! Surf-condition classification.
//!
//! Turns a forecast entry into the short phrase shown under "Condições do
//! surf" in the beach panel: a wave-size clause, a wind clause, and a rain
//! clause when relevant, joined by commas.

use crate::types::WeatherForecast;

const NO_WAVE_DATA: &str = "Sem dados disponíveis";
const RAIN_THRESHOLD_MM: f64 = 1.0;

/// Human-readable surf conditions for one forecast entry.
///
/// Without wave data there is nothing to classify and the phrase is the
/// single "no data" clause.
pub fn surf_condition_text(forecast: &WeatherForecast) -> String {
    let Some(wave_height) = forecast.wave_height else {
        return NO_WAVE_DATA.to_string();
    };

    let mut clauses = vec![wave_clause(wave_height)];

    clauses.push(if is_offshore(forecast.wind_direction) {
        "terral"
    } else {
        "maral"
    });

    if forecast.precipitation > RAIN_THRESHOLD_MM {
        clauses.push("chovendo");
    }

    clauses.join(", ")
}

/// Wave-size clause by height thresholds, lower bound inclusive.
fn wave_clause(height_m: f64) -> &'static str {
    if height_m < 0.5 {
        "Mar flat"
    } else if height_m < 1.0 {
        "Marolas, ideais para iniciantes"
    } else if height_m < 1.5 {
        "Tá mel, bom para todos os níveis"
    } else if height_m < 2.0 {
        "Mar agressivo, bom para surfistas experientes"
    } else {
        "Mar perigoso, só pra big rider"
    }
}

/// Wind blowing land-to-sea ("terral") is favorable.
///
/// Offshore is the open interval (180, 360) plus exactly 0; a south wind of
/// exactly 180° therefore reads as onshore ("maral"). The asymmetry is the
/// product rule, not an accident.
fn is_offshore(direction_deg: f64) -> bool {
    (direction_deg > 180.0 && direction_deg < 360.0) || direction_deg == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forecast(wave_height: Option<f64>, wind_direction: f64, precipitation: f64) -> WeatherForecast {
        WeatherForecast {
            date: "2025-04-03".parse().unwrap(),
            time: "12:00:00".parse().unwrap(),
            temperature: 29.0,
            wind_speed: 14.0,
            wind_direction,
            precipitation,
            wave_height,
            wave_period: wave_height.map(|_| 8),
        }
    }

    #[test]
    fn missing_wave_data_short_circuits() {
        assert_eq!(surf_condition_text(&forecast(None, 225.0, 5.0)), "Sem dados disponíveis");
    }

    #[test]
    fn wave_clause_thresholds() {
        assert!(surf_condition_text(&forecast(Some(0.3), 0.0, 0.0)).starts_with("Mar flat"));
        assert!(surf_condition_text(&forecast(Some(0.5), 0.0, 0.0)).starts_with("Marolas"));
        assert!(surf_condition_text(&forecast(Some(1.0), 0.0, 0.0)).starts_with("Tá mel"));
        assert!(surf_condition_text(&forecast(Some(1.5), 0.0, 0.0)).starts_with("Mar agressivo"));
        assert!(surf_condition_text(&forecast(Some(2.0), 0.0, 0.0)).starts_with("Mar perigoso"));
    }

    #[test]
    fn aggressive_onshore_rainy_clauses_in_order() {
        let text = surf_condition_text(&forecast(Some(1.7), 90.0, 2.0));
        assert_eq!(text, "Mar agressivo, bom para surfistas experientes, maral, chovendo");
    }

    #[test]
    fn south_wind_at_exactly_180_is_onshore() {
        let text = surf_condition_text(&forecast(Some(1.2), 180.0, 0.0));
        assert!(text.contains("maral"));
        assert!(!text.contains("terral"));
    }

    #[test]
    fn southwest_terral_is_offshore() {
        let text = surf_condition_text(&forecast(Some(1.2), 225.0, 0.0));
        assert!(text.contains("terral"));
    }

    #[test]
    fn north_wind_at_zero_is_offshore() {
        let text = surf_condition_text(&forecast(Some(1.2), 0.0, 0.0));
        assert!(text.contains("terral"));
    }

    #[test]
    fn light_rain_is_ignored() {
        let text = surf_condition_text(&forecast(Some(1.2), 225.0, 1.0));
        assert!(!text.contains("chovendo"));

        let text = surf_condition_text(&forecast(Some(1.2), 225.0, 1.1));
        assert!(text.contains("chovendo"));
    }
}
