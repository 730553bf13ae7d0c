use medivoice::application::ports::SpeechSynthesizer;
use medivoice::infrastructure::audio::wav_transcoder::transcode_to_wav;
use medivoice::infrastructure::speech::MockSpeechSynthesizer;

#[tokio::test]
async fn given_any_text_when_mock_synthesizes_then_output_is_decodable_audio() {
    let audio = MockSpeechSynthesizer.synthesize("anything").await.unwrap();

    let reader = hound::WavReader::new(std::io::Cursor::new(audio.to_vec())).unwrap();
    assert_eq!(reader.spec().sample_rate, 22_050);

    // The downstream transcoder must accept it as well.
    transcode_to_wav(&audio).unwrap();
}
