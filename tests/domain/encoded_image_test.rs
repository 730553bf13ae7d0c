use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use medivoice::domain::EncodedImage;

#[test]
fn given_png_extension_when_encoding_then_mime_is_png() {
    let image = EncodedImage::from_bytes("scan.PNG", b"fake png");
    assert_eq!(image.mime(), "image/png");
    assert!(image.as_data_uri().starts_with("data:image/png;base64,"));
}

#[test]
fn given_other_extension_when_encoding_then_mime_is_jpeg() {
    for filename in ["photo.jpg", "photo.jpeg", "photo", "photo.webp"] {
        let image = EncodedImage::from_bytes(filename, b"fake image");
        assert_eq!(image.mime(), "image/jpeg", "wrong mime for {filename}");
    }
}

#[test]
fn given_image_bytes_when_encoding_then_payload_round_trips() {
    let bytes = [0u8, 1, 2, 250, 251, 252];
    let image = EncodedImage::from_bytes("photo.jpg", &bytes);

    let uri = image.as_data_uri();
    let payload = uri.strip_prefix("data:image/jpeg;base64,").unwrap();
    assert_eq!(STANDARD.decode(payload).unwrap(), bytes);
}
