use crate::config::ExportConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Pdf,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Pdf => "pdf",
        }
    }
}

/// `Winter_Outfit_Recommendation_2025-01-31.pdf` for an ISO date prefix.
pub fn file_name(config: &ExportConfig, iso_date: &str, format: ExportFormat) -> String {
    let date: String = iso_date.chars().take(10).collect();
    format!("{}_{}.{}", config.file_prefix, date, format.extension())
}

/// Placement of one tall capture across fixed-height document pages.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub image_width_mm: f64,
    pub image_height_mm: f64,
    /// Vertical offset of the image on each page, first page first.
    pub offsets_mm: Vec<f64>,
}

impl PageLayout {
    /// Scales the capture to the page width and slides it up one page
    /// height per page until nothing is left. Always yields one page.
    pub fn paginate(config: &ExportConfig, canvas_width: f64, canvas_height: f64) -> Self {
        let image_width_mm = config.page_width_mm;
        let image_height_mm = if canvas_width > 0.0 {
            canvas_height * image_width_mm / canvas_width
        } else {
            0.0
        };

        let mut offsets_mm = vec![0.0];
        if !(config.page_height_mm.is_finite() && config.page_height_mm > 0.0) {
            return Self {
                image_width_mm,
                image_height_mm,
                offsets_mm,
            };
        }
        let mut height_left = image_height_mm - config.page_height_mm;
        while height_left > 0.0 {
            offsets_mm.push(height_left - image_height_mm);
            height_left -= config.page_height_mm;
        }

        Self {
            image_width_mm,
            image_height_mm,
            offsets_mm,
        }
    }

    pub fn page_count(&self) -> usize {
        self.offsets_mm.len()
    }
}
