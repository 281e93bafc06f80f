/// System role description sent with every flowchart request.
pub const SYSTEM_PROMPT: &str = "You are a flowchart generation expert. \
Create detailed, well-structured Mermaid flowcharts from meeting transcripts.";

/// Build a deterministic flowchart prompt for a meeting transcript.
pub fn build_flowchart_prompt(transcript: &str, participants: &[String]) -> String {
    format!(
        "Based on the following meeting transcript, create a detailed Mermaid flowchart that shows:\n\
1. The main discussion flow and topics\n\
2. Key decisions and action items\n\
3. Participants and their contributions (identify which parts belong to which participant)\n\
4. Timeline progression of the meeting\n\
5. Any risks or concerns mentioned\n\
\n\
There are only 2 participants: {}.\n\
\n\
Meeting Transcript:\n\
{}\n\
\n\
Please generate a Mermaid flowchart syntax that can be directly used to render the diagram.\n\
Use different shapes for different types of nodes (decisions, processes, participants, etc.).\n\
Make it comprehensive but readable.\n\
\n\
Return only the Mermaid syntax, no additional text or explanations.",
        participants.join(", "),
        transcript
    )
}
