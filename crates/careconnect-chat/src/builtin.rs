//! The rule table shipped with the chatbot.
//!
//! Crisis phrases come first so a message mixing self-harm language with any
//! other topic is always answered with the crisis reply. Topical rules follow
//! in descending distress order.

use std::sync::LazyLock;

use careconnect_core::models::urgency::Urgency;

use crate::rules::{ClassificationRule, Fallback, RuleTable};

const CRISIS: &str = "I'm very concerned about what you've shared. Your life has value and there are people who want to help right now. Please reach out immediately:

Crisis resources:
- National Suicide Prevention Lifeline: call or text 988
- Crisis Text Line: text HOME to 741741
- Emergency services: 911

You don't have to go through this alone. Would you like help finding local mental health services?";

const ANXIETY: &str = "I understand you're feeling anxious. Anxiety can be overwhelming, but there are effective ways to manage it.

Try this breathing pattern:
- Breathe in for 4 counts
- Hold for 4 counts
- Breathe out for 6 counts
- Repeat 5 times

Or ground yourself with 5-4-3-2-1: name 5 things you can see, 4 you can touch, 3 you can hear, 2 you can smell and 1 you can taste.

Would you like me to guide you through one of these?";

const DEPRESSION: &str = "I hear that you're going through a difficult time. Depression can make everything feel harder, but you're not alone in this.

Small steps that can help:
- Keep a regular sleep schedule
- Get some sunlight or fresh air if you can
- Reach out to a trusted friend or family member
- Try gentle movement, like a short walk
- Be kind to yourself

If these feelings persist, talking to a mental health professional can help a lot. What feels most manageable for you right now?";

const STRESS: &str = "Stress can feel overwhelming, but there are ways to manage it.

Quick relief:
- Take 5 slow, deep breaths
- Do a 2-minute body scan
- Step outside for fresh air

Longer term:
- Break large tasks into smaller steps
- Set boundaries and say no when you need to
- Make regular time for self-care

What's contributing most to your stress right now?";

const SLEEP: &str = "Sleep problems can really affect how we feel. Some things that might help:

- Keep a consistent sleep schedule
- Avoid screens for an hour before bed
- Build a relaxing bedtime routine
- Keep your bedroom cool and dark
- Avoid caffeine after 2 PM

Progressive muscle relaxation or a guided meditation can also help you wind down. How long have you been having trouble sleeping?";

const RELATIONSHIPS: &str = "Relationships and social connection matter a great deal for our wellbeing.

- Reach out to one person today, even briefly
- Join an activity or group that interests you
- Be patient with yourself; connection takes time

Many people feel lonely at times, and counseling can help too. What kind of connection are you looking for right now?";

const WORK: &str = "Work and school stress is very common. Some strategies:

- Prioritize tasks by importance and urgency
- Break large projects into smaller steps
- Take short, regular breaks
- Talk to your supervisor or teacher about realistic expectations
- Keep boundaries between work and personal time

What part of work or school feels most challenging?";

const WELLNESS: &str = "It's great that you're thinking about your mental health. Looking after your mind matters as much as looking after your body.

- Move a little every day, even a light walk
- Eat regular meals and stay hydrated
- Aim for 7-9 hours of sleep
- Stay connected with people who support you
- Mindfulness, journaling and therapy are all good tools

What would you like to explore further?";

const BREATHING: &str = "Breathing exercises are a great way to calm stress and anxiety.

4-7-8 breathing:
1. Breathe in through your nose for 4 counts
2. Hold for 7 counts
3. Exhale through your mouth for 8 counts
4. Repeat 3-4 times

Box breathing: in for 4, hold for 4, out for 4, hold for 4.

Try whichever feels more comfortable.";

const JOURNALING: &str = "Journaling is a good way to work through thoughts and feelings. Some prompts to start with:

- How am I feeling right now?
- What's one thing that went well today?
- What's challenging me, and what is one small step I could take?
- What are three things I'm grateful for, and why?";

const GRATITUDE: &str = "I'm glad to hear you're feeling better! Keep going with the practices that are helping, notice the small wins, and stay close to the people who support you.

What's been most helpful for you recently?";

const FALLBACK: &str = "Thank you for sharing that with me. I'm here to listen and support you.

Remember:
- Your feelings are valid
- It's okay to not be okay sometimes
- Asking for help is a sign of strength

Is there something specific you'd like to talk about?";

fn rule(
    id: &str,
    keywords: &[&str],
    response: &str,
    urgency: Urgency,
    distress_level: u8,
) -> ClassificationRule {
    ClassificationRule {
        id: id.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        response: response.to_string(),
        urgency,
        distress_level,
    }
}

/// The built-in rule table, shared read-only by every caller.
pub fn rules() -> &'static RuleTable {
    static RULES: LazyLock<RuleTable> = LazyLock::new(|| RuleTable {
        rules: vec![
            rule(
                "crisis",
                &[
                    "suicide",
                    "suicidal",
                    "kill myself",
                    "killing myself",
                    "end my life",
                    "ending my life",
                    "end it all",
                    "want to die",
                    "don't want to live",
                    "no reason to live",
                    "hurt myself",
                    "hurting myself",
                    "harming myself",
                    "self harm",
                    "self-harm",
                    "better off dead",
                ],
                CRISIS,
                Urgency::Severe,
                10,
            ),
            rule(
                "anxiety",
                &[
                    "anxious",
                    "panic",
                    "worried",
                    "nervous",
                    "scared",
                    "fear",
                    "anxiety attack",
                ],
                ANXIETY,
                Urgency::Moderate,
                7,
            ),
            rule(
                "depression",
                &[
                    "depressed",
                    "sad",
                    "hopeless",
                    "empty",
                    "worthless",
                    "tired",
                    "no energy",
                    "can't sleep",
                    "sleeping too much",
                    // Negated forms, so they never reach the gratitude rule.
                    "unhappy",
                    "not happy",
                    "don't feel good",
                    "not feeling good",
                    "don't feel better",
                    "not feeling better",
                ],
                DEPRESSION,
                Urgency::Moderate,
                6,
            ),
            rule(
                "stress",
                &[
                    "stressed",
                    "overwhelmed",
                    "pressure",
                    "burnout",
                    "exhausted",
                    "too much",
                    "can't cope",
                ],
                STRESS,
                Urgency::Moderate,
                5,
            ),
            rule(
                "sleep",
                &["insomnia", "sleep problems", "staying awake", "trouble sleeping"],
                SLEEP,
                Urgency::Mild,
                4,
            ),
            rule(
                "relationships",
                &[
                    "lonely",
                    "alone",
                    "relationship",
                    "friends",
                    "family problems",
                    "isolated",
                    "social",
                ],
                RELATIONSHIPS,
                Urgency::Mild,
                4,
            ),
            rule(
                "work",
                &[
                    "work", "job", "school", "study", "exam", "deadline", "boss", "colleague",
                    "performance",
                ],
                WORK,
                Urgency::Mild,
                4,
            ),
            rule(
                "wellness",
                &[
                    "therapy",
                    "counseling",
                    "mental health",
                    "wellbeing",
                    "self care",
                    "meditation",
                    "mindfulness",
                ],
                WELLNESS,
                Urgency::Mild,
                2,
            ),
            rule(
                "breathing",
                &["breathing", "breathe", "breath"],
                BREATHING,
                Urgency::Mild,
                3,
            ),
            rule(
                "journaling",
                &["journal", "writing", "write", "express", "thoughts", "feelings"],
                JOURNALING,
                Urgency::Mild,
                3,
            ),
            rule(
                "gratitude",
                &[
                    "feeling good",
                    "feel good",
                    "feeling better",
                    "feel better",
                    "happy",
                    "grateful",
                    "thank",
                ],
                GRATITUDE,
                Urgency::Mild,
                1,
            ),
        ],
        fallback: Fallback {
            response: FALLBACK.to_string(),
            urgency: Urgency::Mild,
            distress_level: 2,
        },
    });
    &RULES
}
