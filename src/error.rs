use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForgeError {
    #[error("Could not resolve world inheritances for: {}", worlds.join(", "))]
    UnresolvableInheritance { worlds: Vec<String> },

    #[error("Global group '{group}' in {file} has no permissions section")]
    MissingPermissions { group: String, file: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("World not compiled: {0}")]
    WorldNotCompiled(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml_bw::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ForgeError>;
