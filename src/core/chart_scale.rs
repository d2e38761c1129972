//! Pixel → Chart-Wert-Umrechnung für den Kurven-Editor.

use glam::DVec2;

/// Abbildung zwischen Screen-Pixeln und Chart-Koordinaten (Funding/Impact).
///
/// Die Skalierung ist `Wertebereich / Pixel-Ausdehnung` je Achse. Die Y-Achse
/// zeigt im Chart nach oben, am Bildschirm nach unten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScale {
    /// Linke obere Ecke der Chart-Fläche in Screen-Koordinaten
    pub origin: DVec2,
    /// Größe der Chart-Fläche in Pixeln
    pub size: DVec2,
    /// Oberes Ende der X-Achse (Funding)
    pub x_domain_max: f64,
    /// Oberes Ende der Y-Achse (Impact)
    pub y_domain_max: f64,
    /// Rasterweite für X-Positionen (0 = kontinuierlich)
    pub x_step: f64,
}

impl ChartScale {
    /// Erstellt eine Skala mit Achsenbereichen `[0, x_domain_max] × [0, y_domain_max]`.
    pub fn new(x_domain_max: f64, y_domain_max: f64, x_step: f64) -> Self {
        Self {
            origin: DVec2::ZERO,
            size: DVec2::ZERO,
            x_domain_max,
            y_domain_max,
            x_step,
        }
    }

    /// Setzt Position und Größe der gerenderten Chart-Fläche.
    pub fn set_viewport(&mut self, origin: DVec2, size: DVec2) {
        self.origin = origin;
        self.size = size;
    }

    /// Gibt `true` zurück, wenn die Chart-Fläche eine nutzbare Größe hat.
    pub fn has_area(&self) -> bool {
        self.size.x > 0.0 && self.size.y > 0.0
    }

    /// Chart-Einheiten pro Pixel je Achse. Leere Achsen liefern 0.
    pub fn value_per_pixel(&self) -> DVec2 {
        DVec2::new(
            per_pixel(self.x_domain_max, self.size.x),
            per_pixel(self.y_domain_max, self.size.y),
        )
    }

    /// Konvertiert eine Screen-Position in Chart-Koordinaten.
    ///
    /// X wird auf `x_step` gerundet, Y bleibt kontinuierlich.
    pub fn screen_to_chart(&self, screen_pos: DVec2) -> DVec2 {
        let local = screen_pos - self.origin;
        let vpp = self.value_per_pixel();
        DVec2::new(
            round_to_step(local.x * vpp.x, self.x_step),
            self.y_domain_max - local.y * vpp.y,
        )
    }

    /// Konvertiert Chart-Koordinaten in eine Screen-Position (ohne Rasterung).
    pub fn chart_to_screen(&self, chart_pos: DVec2) -> DVec2 {
        let ppv = DVec2::new(
            per_pixel(self.size.x, self.x_domain_max),
            per_pixel(self.size.y, self.y_domain_max),
        );
        self.origin
            + DVec2::new(
                chart_pos.x * ppv.x,
                (self.y_domain_max - chart_pos.y) * ppv.y,
            )
    }
}

/// Rundet `value` auf das nächste Vielfache von `step` (step <= 0: unverändert).
pub fn round_to_step(value: f64, step: f64) -> f64 {
    if step > 0.0 && step.is_finite() {
        (value / step).round() * step
    } else {
        value
    }
}

fn per_pixel(range: f64, extent: f64) -> f64 {
    if extent > 0.0 && extent.is_finite() {
        range / extent
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn scale_800x400() -> ChartScale {
        let mut scale = ChartScale::new(200_000.0, 100.0, 1000.0);
        scale.set_viewport(DVec2::new(10.0, 20.0), DVec2::new(800.0, 400.0));
        scale
    }

    #[test]
    fn test_value_per_pixel() {
        let vpp = scale_800x400().value_per_pixel();
        assert_relative_eq!(vpp.x, 250.0);
        assert_relative_eq!(vpp.y, 0.25);
    }

    #[test]
    fn test_screen_to_chart_flips_y() {
        let chart = scale_800x400().screen_to_chart(DVec2::new(410.0, 220.0));
        assert_relative_eq!(chart.x, 100_000.0);
        assert_relative_eq!(chart.y, 50.0);

        // Oberkante = maximaler Impact, Unterkante = 0
        let top = scale_800x400().screen_to_chart(DVec2::new(10.0, 20.0));
        assert_relative_eq!(top.y, 100.0);
        let bottom = scale_800x400().screen_to_chart(DVec2::new(10.0, 420.0));
        assert_relative_eq!(bottom.y, 0.0);
    }

    #[test]
    fn test_screen_to_chart_rounds_x_to_step() {
        // 3 px * 250 = 750 → gerundet 1000
        let chart = scale_800x400().screen_to_chart(DVec2::new(13.0, 20.0));
        assert_relative_eq!(chart.x, 1000.0);
        // 1 px * 250 = 250 → gerundet 0
        let chart = scale_800x400().screen_to_chart(DVec2::new(11.0, 20.0));
        assert_relative_eq!(chart.x, 0.0);
    }

    #[test]
    fn test_zero_sized_chart_yields_finite_values() {
        let scale = ChartScale::new(200_000.0, 100.0, 1000.0);
        assert!(!scale.has_area());
        let chart = scale.screen_to_chart(DVec2::new(123.0, 45.0));
        assert!(chart.x.is_finite() && chart.y.is_finite());
        assert_relative_eq!(chart.x, 0.0);
        assert_relative_eq!(chart.y, 100.0);
        let screen = scale.chart_to_screen(DVec2::new(5000.0, 20.0));
        assert!(screen.x.is_finite() && screen.y.is_finite());
    }

    #[test]
    fn test_chart_to_screen_inverts_unrounded_positions() {
        let scale = scale_800x400();
        let screen = scale.chart_to_screen(DVec2::new(50_000.0, 75.0));
        assert_relative_eq!(screen.x, 210.0);
        assert_relative_eq!(screen.y, 120.0);
        let back = scale.screen_to_chart(screen);
        assert_relative_eq!(back.x, 50_000.0);
        assert_relative_eq!(back.y, 75.0);
    }

    #[test]
    fn test_round_to_step() {
        assert_relative_eq!(round_to_step(1499.0, 1000.0), 1000.0);
        assert_relative_eq!(round_to_step(1500.0, 1000.0), 2000.0);
        assert_relative_eq!(round_to_step(-1600.0, 1000.0), -2000.0);
        assert_relative_eq!(round_to_step(1234.5, 0.0), 1234.5);
    }
}
