use actix_web::{web, HttpResponse, Responder};
use log::{error, info};
use serde_json::json;

use crate::model::{ModelManager, SERVICE_NAME};
use crate::web::models::{
    ChatRequest, ChatResponse, CodeExplanationRequest, CodeExplanationResponse,
    CodeGenerationRequest, CodeGenerationResponse, HealthResponse, ImageGenerationRequest,
    ImageGenerationResponse,
};

// API description served at the root path
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "description": "REST API for BAGEL AI integration with Krius IDE",
        "endpoints": {
            "/health": "Health check",
            "/generate_code": "Generate code from prompt",
            "/explain_code": "Explain provided code",
            "/chat": "Chat with AI assistant",
            "/generate_image": "Generate image from prompt"
        }
    }))
}

// Health check endpoint
pub async fn health(manager: web::Data<ModelManager>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        model_loaded: manager.is_loaded(),
        service: SERVICE_NAME.to_string(),
    })
}

pub async fn generate_code(
    manager: web::Data<ModelManager>,
    req: web::Json<CodeGenerationRequest>,
) -> impl Responder {
    info!(
        "Code generation request for language {} (max_length: {})",
        req.language, req.max_length
    );

    let generated = manager.model.generate_code(&req.prompt, &req.language);

    HttpResponse::Ok().json(CodeGenerationResponse {
        code: generated.code,
        language: req.into_inner().language,
        explanation: Some(generated.explanation),
    })
}

pub async fn explain_code(
    manager: web::Data<ModelManager>,
    req: web::Json<CodeExplanationRequest>,
) -> impl Responder {
    info!(
        "Code explanation request for {} bytes of {}",
        req.code.len(),
        req.language
    );

    let review = manager.model.explain_code(&req.code, &req.language);

    HttpResponse::Ok().json(CodeExplanationResponse {
        explanation: review.explanation,
        suggestions: Some(review.suggestions),
    })
}

pub async fn chat(
    manager: web::Data<ModelManager>,
    req: web::Json<ChatRequest>,
) -> impl Responder {
    info!("Chat request: {}", req.message);

    let response = manager.model.chat_reply(&req.message);

    // Context is echoed back unchanged; it never influences the reply.
    HttpResponse::Ok().json(ChatResponse {
        response,
        context: req.into_inner().context,
    })
}

pub async fn generate_image(
    manager: web::Data<ModelManager>,
    req: web::Json<ImageGenerationRequest>,
) -> impl Responder {
    info!(
        "Image generation request: {}x{} for prompt: {}",
        req.width, req.height, req.prompt
    );

    match manager.model.generate_image(req.width, req.height) {
        Ok(image_base64) => HttpResponse::Ok().json(ImageGenerationResponse {
            image_base64,
            prompt: req.into_inner().prompt,
        }),
        Err(e) => {
            error!("Image generation failed: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "detail": format!("Image generation failed: {}", e)
            }))
        }
    }
}
