use chatfmt_babel::Transport;

#[test]
fn test_whatsapp_cloud_split() {
    let text = "x".repeat(10_000);
    let sizes: Vec<usize> = Transport::WhatsappCloud
        .split(&text)
        .iter()
        .map(|part| part.len())
        .collect();
    assert_eq!(sizes, vec![4000, 4000, 2000]);
}

#[test]
fn test_twilio_split() {
    let text = "y".repeat(3200);
    let sizes: Vec<usize> = Transport::Twilio
        .split(&text)
        .iter()
        .map(|part| part.len())
        .collect();
    assert_eq!(sizes, vec![1500, 1500, 200]);
}

#[test]
fn test_multibyte_text_is_counted_in_characters() {
    let text = "√".repeat(1501);
    let parts = Transport::Twilio.split(&text);
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].chars().count(), 1500);
    assert_eq!(parts[1], "√");
}

#[test]
fn test_transport_names() {
    assert_eq!(Transport::WhatsappCloud.to_string(), "whatsapp-cloud");
    assert_eq!(Transport::Twilio.to_string(), "twilio");
    assert_eq!(
        serde_json::to_string(&Transport::WhatsappCloud).ok().as_deref(),
        Some("\"whatsapp-cloud\"")
    );
}
