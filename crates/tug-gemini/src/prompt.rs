//! Prompt templates, one per guidance kind.

use tug_core::provider::KundaliDetails;

pub fn palm(question: Option<&str>) -> String {
    let mut prompt = String::from(
        "Analyze the provided image of a palm. Identify and interpret the heart line, head line, \
         life line, and fate line. Provide a brief, positive, and insightful astrological reading \
         for each line.",
    );
    if let Some(question) = question.map(str::trim).filter(|q| !q.is_empty()) {
        prompt.push_str(&format!(
            "\n\nAdditionally, the user has a specific question: \"{question}\". Please address \
             this question in your analysis where relevant."
        ));
    }
    prompt
}

pub fn kundali(details: &KundaliDetails) -> String {
    format!(
        "Act as an expert Vedic astrologer from India with deep knowledge of ancient scriptures \
         and the Nadi astrology tradition of Vaideeswaran Koil (palm leaf reading).\n\n\
         Generate a personalized Kundali (Vedic birth chart) analysis for the following individual:\n\
         - Name: {name}\n\
         - Date of Birth: {dob}\n\
         - Time of Birth: {tob}\n\
         - Place of Birth: {pob}\n\n\
         Use a warm, spiritual, and encouraging tone and structure the reading in four parts:\n\
         1. Lagna (Ascendant) chart analysis: core personality, physical attributes and life purpose.\n\
         2. Detailed kundali analysis: career and wealth, relationships and marriage, health.\n\
         3. Vaideeswaran Koil palm leaf reading: past karmic imprints, present life path and a \
         glimpse of the future.\n\
         4. Astrological remedies: a few simple, positive Vedic remedies.\n\n\
         The response must be in JSON format.",
        name = details.name.trim(),
        dob = details.date_of_birth.trim(),
        tob = details.time_of_birth.trim(),
        pob = details.place_of_birth.trim(),
    )
}

pub fn freeform(query: &str, language: &str) -> String {
    format!(
        "You are a wise and compassionate spiritual guide from India, deeply versed in ancient \
         Hindu wisdom and philosophies.\n\
         A user is asking you a question in {language}.\n\
         User's question: \"{query}\"\n\n\
         Please provide a brief, insightful, and comforting response in {language}.\n\
         Your tone should be gentle, encouraging, and full of wisdom.\n\
         Keep the response to 2-3 sentences."
    )
}

pub fn transcribe(language: &str) -> String {
    format!(
        "Transcribe the speech in this recording. The speaker uses the language with the \
         BCP-47 code {language}.\n\
         Reply with the transcript only, in that language's own script. If nothing is said, \
         reply with nothing."
    )
}

pub fn speak(text: &str, language: &str) -> String {
    format!("Say in a calm, gentle voice, in the language with the BCP-47 code {language}: {text}")
}

pub fn emotional_guidance(emotion: &str) -> String {
    format!(
        "Act as a wise, compassionate, and ancient spiritual guide from India.\n\
         A user is feeling \"{emotion}\".\n\n\
         Provide a short, comforting, and insightful piece of wisdom or a mantra (1-2 sentences) \
         to help them with this feeling. The tone should be gentle, reassuring, and profound.\n\n\
         Also, suggest one of the following themes that is most relevant to the user's feeling:\n\
         - 'Money & Abundance'\n\
         - 'Health & Healing'\n\
         - 'Love & Relationships'\n\
         - 'Success & Career'\n\
         - 'Peace & Protection'\n\n\
         The response must be in JSON format."
    )
}

pub fn mantra_insight(name: &str, purpose: &str) -> String {
    format!(
        "You are a wise and compassionate spiritual guide, well-versed in Vedic traditions.\n\
         A user is reflecting on the mantra: \"{name}\".\n\
         Its purpose is: \"{purpose}\".\n\n\
         Please provide a brief (2-3 sentences), profound, and unique meditation insight or focus \
         point related to this mantra. Do not just repeat the meaning; offer a fresh perspective \
         for their meditation."
    )
}

pub fn video_takeaways(title: &str) -> String {
    format!(
        "Act as a spiritual guide who summarizes complex topics into simple, profound points.\n\
         A user has just watched a spiritual video titled: \"{title}\".\n\n\
         Please provide 3 to 5 key spiritual takeaways or life lessons from this video, as a \
         simple list of short, insightful sentences.\n\n\
         The response must be in JSON format."
    )
}

pub fn dream(description: &str) -> String {
    format!(
        "Act as a gentle dream interpreter grounded in Indian spiritual tradition.\n\
         A user describes their dream:\n\"{}\"\n\n\
         Identify the main themes, explain the key symbols, and offer one piece of cosmic \
         guidance for their waking life. Keep each part to 2-3 sentences.\n\n\
         The response must be in JSON format.",
        description.trim()
    )
}
