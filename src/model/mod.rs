mod image;
mod responses;

use anyhow::Result;
use log::debug;

pub const SERVICE_NAME: &str = "BAGEL API Server";

/// Output of a code generation call.
pub struct GeneratedCode {
    pub code: String,
    pub explanation: String,
}

/// Output of a code explanation call.
pub struct CodeReview {
    pub explanation: String,
    pub suggestions: Vec<String>,
}

// A stand-in for the BAGEL multimodal model: every method is a pure
// function that selects among pre-authored responses by substring matching.
pub struct BagelModel;

impl BagelModel {
    /// Pick a source snippet for the prompt. Recognized languages are C++
    /// (with special cases for "hello world" and "class" prompts) and
    /// Python; anything else gets a one-line stub naming the language.
    pub fn generate_code(&self, prompt: &str, language: &str) -> GeneratedCode {
        debug!("Generating {} code for prompt: {}", language, prompt);
        let prompt_lower = prompt.to_lowercase();

        let code = match language.to_lowercase().as_str() {
            "cpp" | "c++" => {
                if prompt_lower.contains("hello world") {
                    responses::CPP_HELLO_WORLD.to_string()
                } else if prompt_lower.contains("class") {
                    responses::CPP_CLASS_TEMPLATE.to_string()
                } else {
                    responses::cpp_stub(prompt)
                }
            }
            "python" => {
                if prompt_lower.contains("hello world") {
                    responses::PYTHON_HELLO_WORLD.to_string()
                } else {
                    responses::python_stub(prompt)
                }
            }
            _ => responses::generic_stub(language, prompt),
        };

        GeneratedCode {
            code,
            explanation: responses::generation_note(prompt),
        }
    }

    /// Describe the submitted code. The walkthrough is parameterized only by
    /// the line count; the suggestion list depends only on the language.
    pub fn explain_code(&self, code: &str, language: &str) -> CodeReview {
        // split('\n') so a trailing newline still counts as an extra line,
        // unlike str::lines().
        let line_count = code.split('\n').count();
        debug!("Explaining {} lines of {} code", line_count, language);

        match language.to_lowercase().as_str() {
            "cpp" | "c++" => CodeReview {
                explanation: responses::cpp_walkthrough(line_count),
                suggestions: responses::cpp_suggestions(),
            },
            "python" => CodeReview {
                explanation: responses::python_walkthrough(line_count),
                suggestions: responses::python_suggestions(),
            },
            _ => CodeReview {
                explanation: responses::generic_walkthrough(language, line_count),
                suggestions: responses::generic_suggestions(),
            },
        }
    }

    /// First substring match wins: greeting, C++, Python, capabilities,
    /// debugging, then the generic fallback quoting the message.
    pub fn chat_reply(&self, message: &str) -> String {
        let lower = message.to_lowercase();

        if lower.contains("hello") || lower.contains("hi") {
            responses::CHAT_GREETING.to_string()
        } else if lower.contains("c++") || lower.contains("cpp") {
            responses::CHAT_CPP_OVERVIEW.to_string()
        } else if lower.contains("python") {
            responses::CHAT_PYTHON_OVERVIEW.to_string()
        } else if lower.contains("help") || lower.contains("what can you do") {
            responses::CHAT_CAPABILITIES.to_string()
        } else if lower.contains("debug") || lower.contains("error") {
            responses::CHAT_DEBUGGING.to_string()
        } else {
            responses::chat_fallback(message)
        }
    }

    /// Produce the base64-encoded PNG placeholder. The prompt never reaches
    /// this layer; pixel content is a fixed color.
    pub fn generate_image(&self, width: u32, height: u32) -> Result<String> {
        debug!("Rendering {}x{} placeholder image", width, height);
        image::placeholder_base64(width, height)
    }
}

/// Process-wide handle to the mock model, shared with every handler. The
/// loaded flag is set once at startup and never changes.
pub struct ModelManager {
    pub model: BagelModel,
    loaded: bool,
}

impl ModelManager {
    pub fn new() -> Self {
        Self {
            model: BagelModel,
            loaded: true,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

impl Default for ModelManager {
    fn default() -> Self {
        Self::new()
    }
}
