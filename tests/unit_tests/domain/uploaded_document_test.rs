use syllabus_tutor::domain::{DocumentState, SupportedFormat};

#[test]
fn given_pdf_filename_when_detecting_format_then_returns_pdf() {
    assert_eq!(
        SupportedFormat::from_filename("calculus.pdf"),
        Some(SupportedFormat::Pdf)
    );
}

#[test]
fn given_uppercase_extension_when_detecting_format_then_matches() {
    assert_eq!(
        SupportedFormat::from_filename("SYLLABUS.DOCX"),
        Some(SupportedFormat::Docx)
    );
}

#[test]
fn given_txt_filename_when_detecting_format_then_maps_to_plain_text_mime() {
    let format = SupportedFormat::from_filename("notes.txt").unwrap();
    assert_eq!(format.as_mime(), "text/plain");
}

#[test]
fn given_unsupported_or_missing_extension_when_detecting_format_then_returns_none() {
    assert_eq!(SupportedFormat::from_filename("slides.pptx"), None);
    assert_eq!(SupportedFormat::from_filename("README"), None);
}

#[test]
fn given_vendor_state_strings_when_parsing_then_maps_lifecycle() {
    assert_eq!("ACTIVE".parse(), Ok(DocumentState::Active));
    assert_eq!("PROCESSING".parse(), Ok(DocumentState::Processing));
    assert_eq!("FAILED".parse(), Ok(DocumentState::Failed));
    assert!("UNKNOWN".parse::<DocumentState>().is_err());
}
