use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AppType {
    #[default]
    #[serde(rename = "Web App")]
    WebApp,
    #[serde(rename = "Mobile App")]
    MobileApp,
    #[serde(rename = "Hybrid")]
    Hybrid,
    #[serde(rename = "AI Tool")]
    AiTool,
    #[serde(rename = "IoT App")]
    IoTApp,
}

impl AppType {
    pub const ALL: [AppType; 5] = [
        AppType::WebApp,
        AppType::MobileApp,
        AppType::Hybrid,
        AppType::AiTool,
        AppType::IoTApp,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AppType::WebApp => "Web App",
            AppType::MobileApp => "Mobile App",
            AppType::Hybrid => "Hybrid",
            AppType::AiTool => "AI Tool",
            AppType::IoTApp => "IoT App",
        }
    }
}

impl fmt::Display for AppType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputLanguage {
    #[default]
    English,
    Hindi,
    Telugu,
}

impl OutputLanguage {
    pub const ALL: [OutputLanguage; 3] = [
        OutputLanguage::English,
        OutputLanguage::Hindi,
        OutputLanguage::Telugu,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OutputLanguage::English => "English",
            OutputLanguage::Hindi => "Hindi",
            OutputLanguage::Telugu => "Telugu",
        }
    }
}

impl fmt::Display for OutputLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExportFormat {
    #[default]
    Markdown,
    Text,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Markdown, ExportFormat::Text];

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "Markdown",
            ExportFormat::Text => "Text",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Text => "txt",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "text/markdown",
            ExportFormat::Text => "text/plain",
        }
    }
}

/// Raw form input, as submitted. Nothing here has been checked yet.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationForm {
    #[serde(default)]
    pub app_name: String,
    #[serde(default)]
    pub app_idea: String,
    #[serde(default)]
    pub app_type: AppType,
    #[serde(default)]
    pub language: OutputLanguage,
    #[serde(default)]
    pub export_format: ExportFormat,
}

impl GenerationForm {
    pub fn validate(&self) -> Result<GenerationRequest, AppError> {
        GenerationRequest::new(&self.app_name, &self.app_idea, self.app_type, self.language)
    }
}

/// A request that has passed the blank-field gate. Values are kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    app_name: String,
    app_idea: String,
    app_type: AppType,
    language: OutputLanguage,
}

impl GenerationRequest {
    pub fn new(
        app_name: &str,
        app_idea: &str,
        app_type: AppType,
        language: OutputLanguage,
    ) -> Result<Self, AppError> {
        if app_name.trim().is_empty() || app_idea.trim().is_empty() {
            return Err(AppError::Validation(
                "Please enter both App Name and Description.".to_string(),
            ));
        }

        Ok(Self {
            app_name: app_name.to_string(),
            app_idea: app_idea.to_string(),
            app_type,
            language,
        })
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn app_idea(&self) -> &str {
        &self.app_idea
    }

    pub fn app_type(&self) -> AppType {
        self.app_type
    }

    pub fn language(&self) -> OutputLanguage {
        self.language
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResult {
    pub text: String,
    /// Set when the model returned nothing and `text` is the placeholder.
    pub fallback: bool,
}
