use log::{debug, error};

use crate::client::GeminiClient;
use crate::request::{PolicyCheckRequest, PolicyCheckResult};

/// Facebook (Meta) community-standards reference guide
///
/// Static configuration: category names and representative
/// Burmese phrases the analyzer prompt is built around.
pub const POLICY_KEYWORDS_GUIDE: &str = "\
📖 Facebook (Meta) Community Standards – မြန်မာဘာသာ Policy Keywords Guide
- 🔞 အကြမ်းဖက်မှုနှင့် အညံ့အကြေး: သတ်, ဓား, ပစ်, ခုတ်, ရိုက်, သွေး, ခေါင်းဖြတ်, အသတ်ခံရသူ, ညှင်းပန်း, အသေခံ
- 👤 မတော်တဆမဟုတ်သော ကိုယ်ရေးကိုယ်တာ: လိပ်စာ, ဖုန်းနံပါတ်, မုန်းတီးစကား, လူမဆန်, ဓာတ်ပုံထုတ်မယ်
- 🧠 မမှန်သော သတင်းအချက်အလက်: COVID ကူးပြီးပြီ, ဘေးကင်းတဲ့အချက်မရှိ, WHO, deepfake, အတု ဓာတ်ပုံ
- 💊 ဆေးဝါးနှင့် မူးယစ်ဆိုင်ရာ: မူးယစ်ဆေး, စိတ်ဖိစီးမှုတားဆေး, ချေးရောင်း, ငွေပေးဆောင်ရင် သယ်ပေးမယ်
- 🧠 ကိုယ့်ကိုယ်ကို ထိခိုက်စေမှု: ကိုယ့်ကိုယ်ကို သတ်ချင်, စိတ်ညစ်ရင် ဆေး, သေကြောင်းကြံ
- 💸 လိမ်လည်မှုနှင့် ငွေကြေး: ငွေလွှဲ, QR code, Screenshot ပေး, ဆော့ဖ်ဝဲ install လုပ်
- 🧒 လူငယ်နှင့် ကာကွယ်ရေး: ၁၃ နှစ်သား, ကလေးတော်တော်ချစ်, OnlyFans, VIP group, sexual grooming
- ⚖️ မတရားမှုနှင့် ဥပဒေချိုးဖောက်မှု: ဗမာလူမျိုးသတ်, ရှမ်းတွေက, တပ်သားတွေ, တပ်ကွဲ
- 🕯️ အထူးအနာဂတ်နှင့် ပဋိပက္ခ: အာဏာသိမ်းရေး, မြစ်ဆုံကို ဖျက်ချင်တယ်, ဖူလုံရေး သဘောထား
";

/// Analyzer prompt: guide, then the text under scrutiny,
/// then the exact four-field JSON contract
pub fn policy_check_prompt(text: &str) -> String
{   format!(
      "You are an expert Burmese Facebook content policy \
       analyzer. Your task is to analyze the user's text \
       based on the provided Facebook Policy Keywords Guide. \
       You must respond in a specific JSON format.\n\n\
       Here is the guide:\n{}\n\n\
       Analyze the following text: \"{}\"\n\n\
       Your response MUST be a valid JSON object.\n\
       1. **isViolation** (boolean): Set to true if any \
       keywords or violating contexts are found, otherwise \
       false.\n\
       2. **reason** (string, in Burmese): Explain WHY the \
       text is or is not a violation. If it is a violation, \
       mention the category of violation.\n\
       3. **violatedKeywords** (array of strings): If \
       'isViolation' is true, list the EXACT Burmese \
       words/phrases from the text that violate the policy. \
       If false, this must be an empty array [].\n\
       4. **revisedText** (string, in Burmese): If \
       'isViolation' is true, rewrite the user's text to be \
       compliant with Facebook policy while preserving the \
       original meaning as much as possible. If false, \
       return the original text.",
      POLICY_KEYWORDS_GUIDE, text
    )
}

/// Screen a text against the policy guide
///
/// The parsed reply must carry exactly the four
/// `PolicyCheckResult` fields; anything else fails loudly
/// with a `SchemaError` rather than guessing a repair.
pub async fn policy_check(
  client: &GeminiClient
, request: PolicyCheckRequest
) -> Result<PolicyCheckResult, crate::error::Error>
{   debug!("Handling policy_check");

    if request.api_key.is_empty()
    {   return Err(crate::error::Error::MissingApiKey);
    }

    let prompt = policy_check_prompt(&request.text);
    let value = client
      .generate_json(&prompt, &request.api_key)
      .await?;

    serde_json::from_value(value).map_err(|e| {
      error!("Policy result failed validation: {}", e);
      crate::error::Error::SchemaError(e.to_string())
    })
}
