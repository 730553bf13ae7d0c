mod consultation_service;

pub use consultation_service::{
    ConsultationError, ConsultationService, ImageUpload, DOCTOR_PREAMBLE,
};
