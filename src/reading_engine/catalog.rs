//! The static card catalog: 22 Major Arcana followed by the four Minor Arcana
//! suits (Ace through King), each in declaration order.
//!
//! The table is plain data. [`build_full_deck`] copies it into a fresh `Vec`
//! so every call yields identical contents in identical order; randomness is
//! only introduced later by [`crate::reading_engine::deck::shuffle`].

use crate::reading_engine::models::{Arcana, Card, Suit};

const fn major(
    name: &'static str,
    upright: &'static str,
    reversed: &'static str,
    upright_guidance: &'static str,
    reversed_guidance: &'static str,
) -> Card {
    Card { name, arcana: Arcana::Major, suit: None, upright, reversed, upright_guidance, reversed_guidance }
}

const fn minor(
    suit: Suit,
    name: &'static str,
    upright: &'static str,
    reversed: &'static str,
    upright_guidance: &'static str,
    reversed_guidance: &'static str,
) -> Card {
    Card { name, arcana: Arcana::Minor, suit: Some(suit), upright, reversed, upright_guidance, reversed_guidance }
}

use crate::reading_engine::models::Suit::{Cups, Pentacles, Swords, Wands};

pub const DECK_SIZE: usize = 78;
pub const MAJOR_COUNT: usize = 22;
pub const CARDS_PER_SUIT: usize = 14;

pub static CATALOG: [Card; DECK_SIZE] = [
    // ── Major Arcana ─────────────────────────────────────────────────────────
    major("The Fool",
        "A fresh beginning calls. Step forward with open curiosity and trust that the path will reveal itself as you walk it, even if you cannot yet see where it leads.",
        "Hesitation or recklessness is distorting a new start. You may be holding back out of fear, or leaping without looking at what you are leaving behind.",
        "Say yes to the unfamiliar and pack lightly.",
        "Pause long enough to check your footing before the leap."),
    major("The Magician",
        "You already hold the tools you need. Focused will and clear intention can turn an idea into something real right now.",
        "Scattered energy or self-doubt is keeping your skills idle, or someone is using charm to manipulate the situation.",
        "Name one intention and act on it today.",
        "Question where your effort is leaking and reclaim it."),
    major("The High Priestess",
        "Quiet knowing runs beneath the surface. Trust intuition and the information that arrives in stillness rather than in noise.",
        "You are ignoring your inner voice or keeping secrets from yourself. The answer is there, but you are too busy to hear it.",
        "Sit in silence and let the answer surface.",
        "Stop outsourcing a decision you already understand."),
    major("The Empress",
        "Abundance, nurture and creative growth surround you. Tend what you love and it will flourish in its own season.",
        "Creative block or over-giving is depleting you. Care for yourself with the same devotion you offer everyone else.",
        "Nourish your body and your projects with patience.",
        "Refill your own cup before pouring for others."),
    major("The Emperor",
        "Structure and steady leadership bring stability. Clear boundaries and reliable routines give your plans a backbone.",
        "Rigidity or a struggle for control is creating friction. Authority used without flexibility is turning into domination.",
        "Set the rule, then keep it consistently.",
        "Loosen your grip where control has become fear."),
    major("The Hierophant",
        "Tradition, mentorship and shared values offer a trustworthy framework. Learning from those who walked before you is wise now.",
        "Conventions no longer fit. You are being invited to question inherited beliefs and find a path that is truly your own.",
        "Seek a teacher or a tested practice.",
        "Honor your own conscience over the rulebook."),
    major("The Lovers",
        "A meaningful union or an important choice aligned with your values. Harmony comes from choosing with your whole heart.",
        "Misalignment or disharmony in a relationship or decision. What you say you value and what you choose are drifting apart.",
        "Choose what you can stand behind fully.",
        "Repair the gap between your values and your actions."),
    major("The Chariot",
        "Determination and disciplined willpower carry you forward. Opposing forces can be steered toward a single victory.",
        "Loss of direction or control. You are pulled in two directions at once and the momentum is spending itself on conflict.",
        "Pick your direction and hold the reins steady.",
        "Stop and realign before pushing harder."),
    major("Strength",
        "Gentle courage and compassion tame what force cannot. Your patience is a kind of power that others can feel.",
        "Self-doubt or raw emotion is running the show. Inner strength is there, but fear has convinced you otherwise.",
        "Lead with softness and stay steady.",
        "Treat your own fear with kindness rather than force."),
    major("The Hermit",
        "Withdrawal and reflection bring clarity. Time alone with your inner light reveals what the crowd cannot show you.",
        "Isolation has tipped into loneliness, or you are refusing the solitude you need to understand yourself.",
        "Take a step back and consult your inner guide.",
        "Reconnect with others before solitude turns to exile."),
    major("Wheel of Fortune",
        "Cycles are turning in your favor. Change is underway, and luck favors those who move with it rather than against it.",
        "A downturn or resistance to change. Clinging to how things were is making the turn of the wheel feel harsher than it is.",
        "Ride the change and look for the opening.",
        "Accept what is ending so the next cycle can begin."),
    major("Justice",
        "Fairness, truth and cause-and-effect are at work. Honest accounting brings a balanced and deserved outcome.",
        "Dishonesty, unfairness or avoidance of accountability. Something is out of balance and the scales will not settle until it is faced.",
        "Act with integrity and weigh both sides.",
        "Own your part before asking others to own theirs."),
    major("The Hanged Man",
        "Surrender and a new perspective. Pausing and looking at things upside down reveals what striving has hidden.",
        "Stalling or martyrdom. You are waiting for something to change without being willing to shift your own view.",
        "Let go of the outcome and see it differently.",
        "End the waiting that has become avoidance."),
    major("Death",
        "An ending that clears space for transformation. Something has run its course, and releasing it allows real renewal.",
        "Resistance to a necessary ending. Holding on to what is finished keeps you suspended between two chapters.",
        "Release what is complete with gratitude.",
        "Notice what you refuse to let die and why."),
    major("Temperance",
        "Balance, moderation and patient blending. Gradual integration of opposites creates something healing and whole.",
        "Excess or imbalance. Extremes are pulling you off center and the mix has become volatile.",
        "Find the middle path and move slowly.",
        "Reduce what is excessive before adding anything new."),
    major("The Devil",
        "Attachment, temptation or a pattern that binds. Seeing the chain clearly is the first step toward slipping free of it.",
        "Release and reclaiming power. You are recognizing an unhealthy hold and beginning to break away from it.",
        "Name the habit that owns more of you than you want.",
        "Keep walking away from what no longer controls you."),
    major("The Tower",
        "Sudden upheaval shatters false structures. What falls was never stable, and the revelation, though jarring, clears the ground for truth.",
        "Avoiding a necessary collapse or fearing change so much that the pressure keeps building. Disaster delayed is not disaster averted.",
        "Let the false foundation fall.",
        "Make the change yourself before it is forced on you."),
    major("The Star",
        "Hope, healing and renewed faith. After difficulty, a calm and generous light shows the way forward.",
        "Discouragement or disconnection from hope. You have lost sight of the light, though it has not gone out.",
        "Trust that healing is underway.",
        "Look for one small reason to believe again."),
    major("The Moon",
        "Illusion, dreams and the unconscious. Not everything is as it appears, and intuition must guide you through the fog.",
        "Confusion lifting, or fear and anxiety distorting perception. Truths hidden in the dark are starting to come out.",
        "Move slowly and trust your instincts in the dark.",
        "Separate what you fear from what is actually true."),
    major("The Sun",
        "Joy, vitality and success. Warmth and clarity shine on your efforts and life feels simple and good.",
        "Temporary clouds over your joy, or optimism tipped into overconfidence. The sun is still there behind the haze.",
        "Celebrate and share your light freely.",
        "Reconnect with what made you feel alive."),
    major("Judgement",
        "Awakening, reckoning and an inner calling. It is time to rise, forgive the past and answer what is calling you.",
        "Self-doubt or harsh self-judgment is drowning out your calling. You keep replaying the past instead of learning from it.",
        "Answer the call you keep hearing.",
        "Forgive yourself and take the lesson, not the shame."),
    major("The World",
        "Completion, integration and accomplishment. A cycle closes in wholeness, and you are ready to celebrate how far you have come.",
        "Loose ends or a sense of incompletion. Something still needs closure before the next journey can truly begin.",
        "Honor the completion and take in the view.",
        "Finish the last step you have been avoiding."),
    // ── Wands ────────────────────────────────────────────────────────────────
    minor(Wands, "Ace of Wands",
        "A spark of inspiration and raw creative potential. A new project, passion or adventure wants to begin.",
        "Delays, false starts or a lack of motivation. The spark is present but has not yet caught.",
        "Act on the idea while it is hot.",
        "Protect the flame until it is strong enough to grow."),
    minor(Wands, "Two of Wands",
        "Planning and bold vision. You are surveying your options and deciding how far you are willing to go.",
        "Fear of the unknown or playing it too safe. The map is ready but you keep postponing the departure.",
        "Sketch the long-range plan.",
        "Take one step beyond your comfort zone."),
    minor(Wands, "Three of Wands",
        "Expansion and foresight. Early efforts are paying off and your horizon is widening.",
        "Obstacles or delays on the way to expansion, often from a lack of preparation.",
        "Look ahead and prepare for growth.",
        "Strengthen the groundwork before scaling up."),
    minor(Wands, "Four of Wands",
        "Celebration, homecoming and harmony. A milestone deserves to be marked with the people who matter.",
        "Tension at home or a celebration that feels hollow. Stability is there but not fully enjoyed.",
        "Gather your people and celebrate.",
        "Tend the relationships beneath the festivities."),
    minor(Wands, "Five of Wands",
        "Competition and lively conflict. Clashing ideas can sharpen everyone if the friction stays constructive.",
        "Avoiding conflict or tension finally dissolving. You may be stepping back from a fight worth having, or one worth leaving.",
        "Engage the debate without making it personal.",
        "Choose which battles still deserve your energy."),
    minor(Wands, "Six of Wands",
        "Public recognition and victory. Your efforts are seen and celebrated.",
        "Self-doubt or a fall from grace. Seeking approval may be overshadowing genuine achievement.",
        "Accept the praise with grace.",
        "Define success by your own measure."),
    minor(Wands, "Seven of Wands",
        "Standing your ground. You have something worth defending and the courage to protect it.",
        "Feeling overwhelmed or giving up under pressure. The defense has become exhausting.",
        "Hold your position with conviction.",
        "Decide what is worth defending and release the rest."),
    minor(Wands, "Eight of Wands",
        "Rapid movement, swift news and momentum. Things are finally moving fast.",
        "Delays, frustration or energy scattered in too many directions at once.",
        "Move quickly while the wind is behind you.",
        "Slow down and aim before you throw."),
    minor(Wands, "Nine of Wands",
        "Resilience and persistence. You are weary but close to the finish line.",
        "Exhaustion or defensiveness. Old wounds are making you guard against threats that may not exist.",
        "Keep going; the end is near.",
        "Rest before you push again."),
    minor(Wands, "Ten of Wands",
        "Burden and heavy responsibility. You are carrying more than your share.",
        "Laying burdens down or collapsing under them. Delegation is overdue.",
        "Finish the load, then reassess what you carry.",
        "Hand off what was never yours to hold."),
    minor(Wands, "Page of Wands",
        "Enthusiasm, exploration and a message of new possibility. Curiosity is your best guide.",
        "Impatience or ideas that never leave the drawing board.",
        "Explore freely and learn as you go.",
        "Commit to one idea long enough to test it."),
    minor(Wands, "Knight of Wands",
        "Passionate action and adventure. Bold energy charges toward a goal.",
        "Haste, recklessness or restless energy that burns out before arriving.",
        "Charge ahead with purpose.",
        "Channel the fire instead of scattering it."),
    minor(Wands, "Queen of Wands",
        "Confidence, warmth and magnetic determination. You shine by being fully yourself.",
        "Insecurity or jealousy dimming your light.",
        "Own the room and lead with warmth.",
        "Reclaim your confidence from comparison."),
    minor(Wands, "King of Wands",
        "Visionary leadership and entrepreneurial spirit. You see the big picture and inspire others toward it.",
        "Impulsiveness or overbearing expectations. Vision without patience becomes pressure.",
        "Lead with vision and delegate the details.",
        "Temper the drive so others can follow."),
    // ── Cups ─────────────────────────────────────────────────────────────────
    minor(Cups, "Ace of Cups",
        "An overflowing heart: new love, compassion or emotional renewal is available to you.",
        "Emotional blockage or love withheld. The cup is full but the feelings are being repressed.",
        "Open your heart and let feeling flow.",
        "Allow yourself to feel what you have been holding back."),
    minor(Cups, "Two of Cups",
        "Partnership, mutual attraction and connection. A bond grows between equals.",
        "Imbalance or a break in connection. Communication between partners has faltered.",
        "Meet the other person halfway.",
        "Restore balance through an honest conversation."),
    minor(Cups, "Three of Cups",
        "Friendship, community and celebration. Joy multiplies when it is shared.",
        "Overindulgence, gossip or isolation from your circle.",
        "Reach out to friends and celebrate together.",
        "Check whether your social life still nourishes you."),
    minor(Cups, "Four of Cups",
        "Apathy and contemplation. Something is being offered, but you are too withdrawn to notice it.",
        "Renewed interest and awareness. You are ready to accept what is in front of you.",
        "Look up; an offer is within reach.",
        "Say yes to the opportunity you nearly missed."),
    minor(Cups, "Five of Cups",
        "Grief and regret. Loss dominates your view, yet not everything has spilled.",
        "Acceptance and moving on. You are beginning to turn toward what remains.",
        "Honor the loss, then notice what still stands.",
        "Keep turning toward the cups that remain."),
    minor(Cups, "Six of Cups",
        "Nostalgia, innocence and happy memories. The past offers comfort and simple kindness.",
        "Stuck in the past or idealizing what was. Nostalgia is keeping you from the present.",
        "Let a good memory soften today.",
        "Live in the present rather than in what was."),
    minor(Cups, "Seven of Cups",
        "Many choices and vivid fantasies. Not every option is as real as it looks.",
        "Clarity arrives and illusions fall away. You are ready to choose.",
        "Sort the dreams from the real options.",
        "Commit to the option that remains true."),
    minor(Cups, "Eight of Cups",
        "Walking away in search of deeper meaning. What you built no longer satisfies the soul.",
        "Fear of leaving or aimless drifting. You know it is time to go but cannot yet move.",
        "Leave with grace what no longer fulfills you.",
        "Decide whether you are staying or truly going."),
    minor(Cups, "Nine of Cups",
        "Contentment and wishes fulfilled. Emotional satisfaction is close.",
        "Smugness or dissatisfaction despite having much. The wish came true but the heart wants more.",
        "Savor what you have received.",
        "Look beneath the wish for the deeper need."),
    minor(Cups, "Ten of Cups",
        "Harmony, family and lasting happiness. Emotional fulfillment is shared with those you love.",
        "Disconnection at home or misaligned values within a family or group.",
        "Invest in your closest bonds.",
        "Repair the rift before it becomes a wall."),
    minor(Cups, "Page of Cups",
        "A creative or emotional message. Intuition offers a surprising, tender invitation.",
        "Emotional immaturity or a creative block. Feelings are being dismissed.",
        "Follow the gentle, surprising impulse.",
        "Take your own feelings seriously."),
    minor(Cups, "Knight of Cups",
        "Romance, charm and following the heart. An offer or invitation arrives with warmth.",
        "Moodiness or unrealistic expectations. Idealism is clouding judgment.",
        "Lead with your heart and make the offer.",
        "Ground your ideals in what is actually possible."),
    minor(Cups, "Queen of Cups",
        "Compassion, emotional security and deep intuition. You hold space for others with calm care.",
        "Emotional overwhelm or co-dependence. Care for others has eclipsed care for self.",
        "Listen deeply and respond with compassion.",
        "Set emotional boundaries that protect your calm."),
    minor(Cups, "King of Cups",
        "Emotional balance and diplomatic wisdom. Calm feeling guides steady action.",
        "Emotional manipulation or volatility beneath a calm surface.",
        "Stay steady and lead with empathy.",
        "Acknowledge the feelings you have been managing instead of feeling."),
    // ── Swords ───────────────────────────────────────────────────────────────
    minor(Swords, "Ace of Swords",
        "A breakthrough in clarity. Truth cuts through confusion and a new idea arrives sharp and clean.",
        "Confusion or miscommunication. A harsh truth is being wielded carelessly or avoided entirely.",
        "Speak the clear truth.",
        "Clarify your thinking before you speak."),
    minor(Swords, "Two of Swords",
        "A difficult decision and a stalemate. Avoiding the choice keeps the peace only on the surface.",
        "Information overload or indecision finally breaking. The blindfold is slipping.",
        "Gather what you need and then decide.",
        "Make the choice you have been postponing."),
    minor(Swords, "Three of Swords",
        "Heartbreak, grief and painful truth. The hurt is real and deserves acknowledgment.",
        "Recovery and forgiveness. The wound is beginning to close.",
        "Let yourself grieve honestly.",
        "Release the pain you have been rehearsing."),
    minor(Swords, "Four of Swords",
        "Rest, recovery and contemplation. Retreat now is a form of strength.",
        "Restlessness or burnout from refusing to rest.",
        "Schedule real rest.",
        "Stop treating rest as something you must earn."),
    minor(Swords, "Five of Swords",
        "Conflict and hollow victory. Winning the argument may cost the relationship.",
        "Reconciliation or the lingering shame of a fight. It is time to make amends.",
        "Ask whether this victory is worth its cost.",
        "Reach out and make peace."),
    minor(Swords, "Six of Swords",
        "Transition and moving toward calmer waters. You are leaving turbulence behind.",
        "Resistance to moving on, or unfinished business following you.",
        "Accept the passage to calmer ground.",
        "Settle what you are carrying before you cross."),
    minor(Swords, "Seven of Swords",
        "Strategy, stealth or deception. Someone, perhaps you, is not being fully transparent.",
        "Confession or getting caught. Secrets are surfacing and a conscience stirs.",
        "Be strategic but stay honest.",
        "Come clean before the truth arrives on its own."),
    minor(Swords, "Eight of Swords",
        "Feeling trapped by your own thoughts. The restrictions are looser than they appear.",
        "Release from limiting beliefs. You are seeing a way out.",
        "Question the story that keeps you stuck.",
        "Take the first step out of the circle."),
    minor(Swords, "Nine of Swords",
        "Anxiety, worry and sleepless nights. Fear in the mind is louder than reality.",
        "Hope returning or reaching out for help. The worst of the worry is passing.",
        "Write the fears down and test them against facts.",
        "Share the burden with someone you trust."),
    minor(Swords, "Ten of Swords",
        "A painful ending or rock bottom. It cannot get worse, and the dawn is already on the horizon.",
        "Recovery and regeneration. You are getting back up, though the scars remain.",
        "Let the ending be final.",
        "Rise slowly and refuse to reopen the wound."),
    minor(Swords, "Page of Swords",
        "Curiosity, new ideas and eager communication. A sharp mind is ready to learn.",
        "Gossip or hasty words. Ideas outrun follow-through.",
        "Ask questions and keep learning.",
        "Think before speaking."),
    minor(Swords, "Knight of Swords",
        "Ambitious, fast-thinking action. You are charging toward a goal with conviction.",
        "Impulsiveness or burnout. Rushing without a plan is creating collateral damage.",
        "Pursue the goal with focused intent.",
        "Slow down and consider who is in your path."),
    minor(Swords, "Queen of Swords",
        "Independent, clear perception and honest boundaries. You see through pretense with fairness.",
        "Coldness or bitterness. Sharp judgment has turned cutting.",
        "Be direct and fair.",
        "Soften the edge without dulling the truth."),
    minor(Swords, "King of Swords",
        "Intellectual authority and truthful leadership. Decisions rest on logic and ethics.",
        "Manipulation or abuse of intellect. Cold reasoning lacks compassion.",
        "Decide with a clear head and a clean conscience.",
        "Balance logic with care for the people affected."),
    // ── Pentacles ────────────────────────────────────────────────────────────
    minor(Pentacles, "Ace of Pentacles",
        "A new financial, career or health opportunity. Something tangible is ready to be planted.",
        "Lost opportunity or poor planning. The seed is there but the soil is not ready.",
        "Plant the seed with a practical plan.",
        "Prepare the ground before investing."),
    minor(Pentacles, "Two of Pentacles",
        "Juggling priorities and adaptability. Balance is possible if you stay flexible.",
        "Overcommitment and disorganization. Too many demands are slipping through your hands.",
        "Prioritize and keep moving.",
        "Drop one ball on purpose before you drop them all."),
    minor(Pentacles, "Three of Pentacles",
        "Teamwork, collaboration and skilled craft. Good work is recognized when built together.",
        "Poor collaboration or lack of commitment. The team is misaligned.",
        "Collaborate and value each skill.",
        "Clarify roles and expectations."),
    minor(Pentacles, "Four of Pentacles",
        "Security, saving and control. Holding on protects resources but can limit growth.",
        "Greed or loosening your grip. Generosity or overspending is shifting the balance.",
        "Protect your foundation.",
        "Examine what scarcity is driving your choices."),
    minor(Pentacles, "Five of Pentacles",
        "Hardship, loss and feeling left out in the cold. Help may be closer than you think.",
        "Recovery from hardship. Support is being found and accepted.",
        "Reach out for the help that is available.",
        "Keep accepting the support coming your way."),
    minor(Pentacles, "Six of Pentacles",
        "Generosity, charity and fair exchange. Resources flow where they are needed.",
        "Strings attached or one-sided giving. Power dynamics distort generosity.",
        "Give and receive with fairness.",
        "Check whether the exchange is truly balanced."),
    minor(Pentacles, "Seven of Pentacles",
        "Patience and long-term investment. Growth is slow, but the harvest is coming.",
        "Impatience or effort without reward. It may be time to change the approach.",
        "Assess progress and keep tending.",
        "Decide whether to redirect your investment."),
    minor(Pentacles, "Eight of Pentacles",
        "Diligence, mastery and dedicated practice. Skill improves through repetition.",
        "Perfectionism or lack of focus. Work has become mechanical or rushed.",
        "Commit to the craft one detail at a time.",
        "Reconnect with why the work matters."),
    minor(Pentacles, "Nine of Pentacles",
        "Self-sufficiency, abundance and earned comfort. Your discipline has paid off.",
        "Overwork or financial setbacks. Independence is costing too much.",
        "Enjoy the fruits of your effort.",
        "Rebuild a life that feels sustainable."),
    minor(Pentacles, "Ten of Pentacles",
        "Legacy, family wealth and long-term security. What you build now can last generations.",
        "Family disputes over resources or instability in long-held foundations.",
        "Think in generations, not seasons.",
        "Address the disputes threatening your foundation."),
    minor(Pentacles, "Page of Pentacles",
        "Ambition, study and a practical new beginning. A student mindset opens doors.",
        "Procrastination or lack of progress. Goals remain theoretical.",
        "Study and take the first practical step.",
        "Turn the plan into a daily habit."),
    minor(Pentacles, "Knight of Pentacles",
        "Steady, reliable progress. Routine and hard work bring results.",
        "Stagnation or boredom. The routine has become a rut.",
        "Keep the steady pace.",
        "Change one habit to break the rut."),
    minor(Pentacles, "Queen of Pentacles",
        "Nurturing practicality and abundance. You care for others and your home with grounded wisdom.",
        "Self-neglect or imbalance between work and home.",
        "Create comfort through practical care.",
        "Tend your own wellbeing as carefully as your duties."),
    minor(Pentacles, "King of Pentacles",
        "Wealth, security and disciplined leadership. Practical mastery builds lasting abundance.",
        "Materialism or stubbornness. Security has become an obsession.",
        "Lead with stability and generosity.",
        "Measure wealth by more than money."),
];

/// Assemble the full 78-card deck in catalog order.
///
/// Pure and deterministic: repeated calls return equal sequences.
pub fn build_full_deck() -> Vec<Card> {
    CATALOG.to_vec()
}

/// Look up a catalog entry by name, ignoring ASCII case.
pub fn find_card(name: &str) -> Option<&'static Card> {
    let name = name.trim();
    CATALOG.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn deck_has_expected_shape() {
        let deck = build_full_deck();
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(deck.iter().filter(|c| c.is_major()).count(), MAJOR_COUNT);
        for suit in Suit::ALL {
            let n = deck.iter().filter(|c| c.suit == Some(suit)).count();
            assert_eq!(n, CARDS_PER_SUIT, "{suit} should have {CARDS_PER_SUIT} cards");
        }
    }

    #[test]
    fn suit_present_only_on_minor_cards() {
        for c in &CATALOG {
            assert_eq!(c.is_major(), c.suit.is_none(), "suit/arcana mismatch on {}", c.name);
        }
    }

    #[test]
    fn names_are_unique() {
        let mut seen = HashSet::new();
        for c in &CATALOG {
            assert!(seen.insert(c.name), "Duplicate card: {}", c.name);
        }
    }

    #[test]
    fn every_card_has_text_for_both_orientations() {
        for c in &CATALOG {
            assert!(!c.upright.trim().is_empty(), "{} upright", c.name);
            assert!(!c.reversed.trim().is_empty(), "{} reversed", c.name);
            assert!(!c.upright_guidance.trim().is_empty(), "{} upright guidance", c.name);
            assert!(!c.reversed_guidance.trim().is_empty(), "{} reversed guidance", c.name);
        }
    }

    #[test]
    fn find_card_ignores_case() {
        let card = find_card("the tower").expect("The Tower is in the catalog");
        assert_eq!(card.name, "The Tower");
        assert!(find_card("The Jester").is_none());
    }

    #[test]
    fn blank_text_falls_back_to_other_orientation() {
        let card = Card { reversed: "  ", ..CATALOG[0] };
        assert_eq!(card.meaning_for(true), card.upright);
        assert_eq!(card.meaning_for(false), card.upright);
    }
}
