//! Fixed coefficient tables for the A-weighting filter cascade.
//!
//! One second-order high-pass section plus one long FIR section per sample
//! rate, designed to match the analog A-weighting response
//! `Ra(f) = 12200^2 f^4 / ((f^2+20.6^2)(f^2+12200^2) sqrt(f^2+107.7^2) sqrt(f^2+737.9^2))`.

/// High-pass biquad numerator, 8 kHz.
pub(crate) const IIR_B_8K: [f64; 3] = [
    0.97803047920655972192,
    -1.95606095841311944383,
    0.97803047920655972192,
];
/// High-pass biquad denominator, 8 kHz.
pub(crate) const IIR_A_8K: [f64; 3] = [
    1.00000000000000000000,
    -1.95557824031503546536,
    0.95654367651120331129,
];
/// High-pass biquad numerator, 16 kHz.
pub(crate) const IIR_B_16K: [f64; 3] = [
    0.98211268665798745481,
    -1.96422537331597490962,
    0.98211268665798745481,
];
/// High-pass biquad denominator, 16 kHz.
pub(crate) const IIR_A_16K: [f64; 3] = [
    1.00000000000000000000,
    -1.96390539174032729974,
    0.96454535489162229744,
];

/// FIR section, 8 kHz (401 taps).
pub(crate) const FIR_8K: [f64; 401] = [
    -0.00000048447483696946, -0.00000022512318749614, -0.00000026294025838101,
    0.00000001064770950293, 0.00000003833470677151, 0.00000051126078952589,
    0.00000069953309206104, 0.00000098541838241537, 0.00000081475746826278,
    0.00000071268849316663, 0.00000047296424495409, 0.00000045167560549269,
    0.00000025625324551665, 0.00000029659517075128, 0.00000012973089907994,
    0.00000021259865101836, 0.00000006731555126460, 0.00000020685105369918,
    0.00000011425817192679, 0.00000041296073931891, 0.00000044791493633252,
    0.00000070403634084571, 0.00000055460203484093, 0.00000059180030971632,
    0.00000037291369217390, 0.00000043930757040800, 0.00000022350428357547,
    0.00000032417428619399, 0.00000010931231083113, 0.00000023960656238246,
    0.00000002518603320581, 0.00000020360644134332, 0.00000002294875525823,
    0.00000036684242335179, 0.00000032206388036039, 0.00000067239882378009,
    0.00000047076577332115, 0.00000062355204864449, 0.00000033329059818567,
    0.00000049980041816919, 0.00000019054258683724, 0.00000038619575844507,
    0.00000005987624410169, 0.00000028352923650070, -0.00000006065134972245,
    0.00000021066197086678, -0.00000011559068267007, 0.00000035187682882953,
    0.00000018911184032816, 0.00000071185755567156, 0.00000039628928325198,
    0.00000071727603322036, 0.00000028502865756631, 0.00000061047935453455,
    0.00000013533215782697, 0.00000048963932090098, -0.00000002412770048109,
    0.00000035905116933378, -0.00000019714163211650, 0.00000023343303301514,
    -0.00000032883174661595, 0.00000034112098540144, -0.00000002013183789564,
    0.00000076876433367610, 0.00000025451747786098, 0.00000083392066985720,
    0.00000016702345929555, 0.00000074451146044984, 0.00000000368726942094,
    0.00000061262145802736, -0.00000019658915230727, 0.00000044360091722352,
    -0.00000044388652434922, 0.00000024103770006125, -0.00000069300296642645,
    0.00000028299231855406, -0.00000040858734051716, 0.00000077228655642159,
    -0.00000007206267809928, 0.00000089818974605587, -0.00000014399904288098,
    0.00000082277817797847, -0.00000033588376942978, 0.00000066948742873521,
    -0.00000060057886334042, 0.00000044146432002551, -0.00000096039560383583,
    0.00000012053414322732, -0.00000139567180432868, 0.00000003499817058916,
    -0.00000120127431401377, 0.00000054929811663290, -0.00000084136392860322,
    0.00000071187362632263, -0.00000093656445044485, 0.00000062086550172766,
    -0.00000120620094216959, 0.00000040541476845153, -0.00000159893445870286,
    0.00000006116939341500, -0.00000215817883874979, -0.00000046805016014766,
    -0.00000291567502959354, -0.00000081034476310266, -0.00000295972826281522,
    -0.00000038208445373341, -0.00000270158074324256, -0.00000028610530331721,
    -0.00000295437553011978, -0.00000051213557187288, -0.00000346084232168490,
    -0.00000093544688046448, -0.00000417377051206647, -0.00000157785035711933,
    -0.00000517283917494427, -0.00000256013415986944, -0.00000658452041834079,
    -0.00000348617114338415, -0.00000725051504153352, -0.00000348145442182330,
    -0.00000748452095899366, -0.00000381670662519333, -0.00000833912676894361,
    -0.00000460581537897684, -0.00000960803218461066, -0.00000575052259069264,
    -0.00001126971690354723, -0.00000731471724310772, -0.00001347382962085700,
    -0.00000953631917028709, -0.00001652423778949483, -0.00001204562230261030,
    -0.00001898108292544097, -0.00001359523368806706, -0.00002102023713909460,
    -0.00001567362600146969, -0.00002402916745522739, -0.00001859827094821024,
    -0.00002792481555180809, -0.00002236632163891675, -0.00003278682614223167,
    -0.00002716785941170217, -0.00003894078939793811, -0.00003350000474485616,
    -0.00004707261529101495, -0.00004117953534261129, -0.00005549229201502203,
    -0.00004854831975713259, -0.00006428602304202158, -0.00005751749178242488,
    -0.00007547082178730966, -0.00006888306835026006, -0.00008937608730225377,
    -0.00008304065366192661, -0.00010653315756608934, -0.00010069556565277376,
    -0.00012791706451173652, -0.00012317597326295306, -0.00015534957920904628,
    -0.00015119559113842406, -0.00018743511243768355, -0.00018315735451190256,
    -0.00022492450567979631, -0.00022252894483161461, -0.00027191753804259159,
    -0.00027210151946550513, -0.00033091855632192026, -0.00033462449100590694,
    -0.00040528057920629279, -0.00041401099044859757, -0.00049996344641314633,
    -0.00051634251110413301, -0.00062296124512021081, -0.00064870975228481043,
    -0.00077929439175705522, -0.00081642092721146428, -0.00097961081175696862,
    -0.00103615592056275404, -0.00124532298732607061, -0.00133067510583451858,
    -0.00160455574020486129, -0.00173377904846212577, -0.00210208956880716599,
    -0.00230122036337402887, -0.00281419951501742224, -0.00313155247940679650,
    -0.00388062211113633822, -0.00440501290142665362, -0.00555548659253778630,
    -0.00647018812272768650, -0.00837591414127070166, -0.01010231987300322896,
    -0.01356061827384147031, -0.01708437456947442534, -0.02402258013383605159,
    -0.03176179634779018046, -0.04725099052436917274, -0.06500419192239298427,
    -0.10495713406978124382, -0.13001585049351535583, 1.00202934757439754421,
    -0.13001585049351260803, -0.10495713406978261772, -0.06500419192239276223,
    -0.04725099052436897151, -0.03176179634779023597, -0.02402258013383685303,
    -0.01708437456947343655, -0.01356061827384207226, -0.01010231987300251599,
    -0.00837591414127101912, -0.00647018812272795105, -0.00555548659253785135,
    -0.00440501290142657816, -0.00388062211113645011, -0.00313155247940646083,
    -0.00281419951501782339, -0.00230122036337384803, -0.00210208956880718334,
    -0.00173377904846190763, -0.00160455574020492830, -0.00133067510583440777,
    -0.00124532298732645832, -0.00103615592056261765, -0.00097961081175704668,
    -0.00081642092721146472, -0.00077929439175693650, -0.00064870975228487461,
    -0.00062296124512023910, -0.00051634251110382412, -0.00049996344641339472,
    -0.00041401099044828212, -0.00040528057920655793, -0.00033462449100599172,
    -0.00033091855632189261, -0.00027210151946566391, -0.00027191753804250599,
    -0.00022252894483150621, -0.00022492450567991013, -0.00018315735451169751,
    -0.00018743511243781582, -0.00015119559113829513, -0.00015534957920906756,
    -0.00012317597326292961, -0.00012791706451191086, -0.00010069556565275803,
    -0.00010653315756613178, -0.00008304065366182717, -0.00008937608730207478,
    -0.00006888306835033379, -0.00007547082178731399, -0.00005751749178236594,
    -0.00006428602304224104, -0.00004854831975686155, -0.00005549229201534046,
    -0.00004117953534267964, -0.00004707261529099294, -0.00003350000474499829,
    -0.00003894078939759813, -0.00002716785941168689, -0.00003278682614236486,
    -0.00002236632163880632, -0.00002792481555207722, -0.00001859827094805007,
    -0.00002402916745519642, -0.00001567362600153142, -0.00002102023713907599,
    -0.00001359523368790508, -0.00001898108292530993, -0.00001204562230221977,
    -0.00001652423778936245, -0.00000953631917073583, -0.00001347382962091341,
    -0.00000731471724375662, -0.00001126971690382800, -0.00000575052259002190,
    -0.00000960803218588184, -0.00000460581537765319, -0.00000833912676879278,
    -0.00000381670662386180, -0.00000748452096203882, -0.00000348145442048370,
    -0.00000725051504105103, -0.00000348617114306444, -0.00000658452041804100,
    -0.00000256013416030796, -0.00000517283917536835, -0.00000157785035723070,
    -0.00000417377051229723, -0.00000093544688056833, -0.00000346084232157659,
    -0.00000051213557197883, -0.00000295437552986686, -0.00000028610530303880,
    -0.00000270158074328942, -0.00000038208445346697, -0.00000295972826305478,
    -0.00000081034476315829, -0.00000291567502957262, -0.00000046805016033679,
    -0.00000215817883858096, 0.00000006116939340522, -0.00000159893445868161,
    0.00000040541476858004, -0.00000120620094225548, 0.00000062086550181404,
    -0.00000093656445052059, 0.00000071187362625699, -0.00000084136392873181,
    0.00000054929811657256, -0.00000120127431400949, 0.00000003499817062538,
    -0.00000139567180421291, 0.00000012053414316903, -0.00000096039560378374,
    0.00000044146432006458, -0.00000060057886339091, 0.00000066948742887569,
    -0.00000033588376961814, 0.00000082277817799631, -0.00000014399904286968,
    0.00000089818974600899, -0.00000007206267791168, 0.00000077228655631520,
    -0.00000040858734051298, 0.00000028299231857979, -0.00000069300296651602,
    0.00000024103770018627, -0.00000044388652449250, 0.00000044360091722030,
    -0.00000019658915231848, 0.00000061262145802356, 0.00000000368726950959,
    0.00000074451146042521, 0.00000016702345934702, 0.00000083392066980561,
    0.00000025451747789236, 0.00000076876433370927, -0.00000002013183795176,
    0.00000034112098553517, -0.00000032883174674481, 0.00000023343303310152,
    -0.00000019714163212011, 0.00000035905116921998, -0.00000002412770030070,
    0.00000048963932070069, 0.00000013533215787171, 0.00000061047935452411,
    0.00000028502865736597, 0.00000071727603351564, 0.00000039628928307606,
    0.00000071185755575744, 0.00000018911184033621, 0.00000035187682854291,
    -0.00000011559068225173, 0.00000021066197066498, -0.00000006065134949705,
    0.00000028352923609170, 0.00000005987624482286, 0.00000038619575789876,
    0.00000019054258687088, 0.00000049980041800381, 0.00000033329059839068,
    0.00000062355204865072, 0.00000047076577331007, 0.00000067239882386183,
    0.00000032206388025069, 0.00000036684242346853, 0.00000002294875522055,
    0.00000020360644131705, 0.00000002518603326988, 0.00000023960656229525,
    0.00000010931231087879, 0.00000032417428617176, 0.00000022350428353128,
    0.00000043930757046438, 0.00000037291369211717, 0.00000059180030972943,
    0.00000055460203483238, 0.00000070403634081861, 0.00000044791493638141,
    0.00000041296073931221, 0.00000011425817192819, 0.00000020685105369570,
    0.00000006731555124485, 0.00000021259865104789, 0.00000012973089908160,
    0.00000029659517075261, 0.00000025625324549990, 0.00000045167560549383,
    0.00000047296424497843, 0.00000071268849317641, 0.00000081475746827296,
    0.00000098541838238358, 0.00000069953309205412, 0.00000051126078953913,
    0.00000003833470675649, 0.00000001064770952157, -0.00000026294025842014,
    -0.00000022512318749586, -0.00000048447483693658,
];

/// FIR section, 16 kHz (301 taps).
pub(crate) const FIR_16K: [f64; 301] = [
    -0.00000163823566567235, -0.00000129349101568055, -0.00000173855867999297,
    -0.00000138886083315020, -0.00000186074944599914, -0.00000150193139198946,
    -0.00000200604496185638, -0.00000163127987422071, -0.00000217132557278059,
    -0.00000176741808887155, -0.00000234382073006229, -0.00000183094344655654,
    -0.00000250084283910075, -0.00000199864660566820, -0.00000262789002458754,
    -0.00000215386043860660, -0.00000289217185109260, -0.00000239378523373080,
    -0.00000322662206448115, -0.00000269434283679307, -0.00000362531450279619,
    -0.00000305075217416252, -0.00000408817430627477, -0.00000346416689290217,
    -0.00000461920770121783, -0.00000393932206526000, -0.00000522530308400259,
    -0.00000448351321445257, -0.00000591564184061565, -0.00000510612699627384,
    -0.00000670136346012773, -0.00000581822564278744, -0.00000759496947841621,
    -0.00000663144143348438, -0.00000860841360320021, -0.00000755451505352295,
    -0.00000974743477173025, -0.00000858432874211604, -0.00001099850081772816,
    -0.00000951231180346016, -0.00001227514374058944, -0.00001069770708620096,
    -0.00001351961693721276, -0.00001190082625789161, -0.00001508067422270440,
    -0.00001334654683810277, -0.00001689161756572877, -0.00001502283369917000,
    -0.00001895702883557266, -0.00001693675311730079, -0.00002129105878855550,
    -0.00001910487054790810, -0.00002391661786573805, -0.00002155212349973529,
    -0.00002686481719856254, -0.00002431145023492758, -0.00003017501508719200,
    -0.00002742414172429308, -0.00003389545048083550, -0.00003094066284628364,
    -0.00003808392712044369, -0.00003492107295288400, -0.00004280677257843587,
    -0.00003943266482462276, -0.00004813086069643492, -0.00004454795915910790,
    -0.00005411064105123142, -0.00004978108057728533, -0.00006053146558008195,
    -0.00005591629066482250, -0.00006726077312005088, -0.00006247107842621700,
    -0.00007501845211855596, -0.00006996429387079926, -0.00008383355250755138,
    -0.00007848989593105642, -0.00009381300436270244, -0.00008815897211855582,
    -0.00010508611888928092, -0.00009910600683043637, -0.00011781065580099466,
    -0.00011149480231451605, -0.00013217771097594411, -0.00012552361433682034,
    -0.00014841748019445592, -0.00014143186724447642, -0.00016680726333668429,
    -0.00015950964206924115, -0.00018768220029857365, -0.00018011048605059599,
    -0.00021144733901080876, -0.00020366775396491089, -0.00023858297765662684,
    -0.00023076411910554420, -0.00026970431005075987, -0.00026068439401730485,
    -0.00030470598160643134, -0.00029539153470893316, -0.00034372546700033225,
    -0.00033441055096840278, -0.00038864335568094714, -0.00037937084585191045,
    -0.00044046553493560527, -0.00043137871260839591, -0.00050044145280684585,
    -0.00049173817484151965, -0.00057009787755619838, -0.00056205601515835267,
    -0.00065134093406154082, -0.00064435205571055265, -0.00074658366829230961,
    -0.00074120024680015531, -0.00085891975554849679, -0.00085592507999440650,
    -0.00099237016459549198, -0.00099288457416451940, -0.00115224073327841446,
    -0.00115788645226965956, -0.00134564572909820685, -0.00135881539184466910,
    -0.00158226727446100215, -0.00160686124447576299, -0.00187589512010747717,
    -0.00191361708126458496, -0.00224313077365659395, -0.00230285969530687976,
    -0.00270869448954760448, -0.00280161130222293274, -0.00331284571947834715,
    -0.00345545877593055615, -0.00411288499378428731, -0.00433074047660635814,
    -0.00519546795915075323, -0.00552823600867017109, -0.00669413267342846511,
    -0.00720362577421732476, -0.00881837437615939912, -0.00960052818708471110,
    -0.01190264418816686619, -0.01310369434291633675, -0.01649112537915961921,
    -0.01832242291243315474, -0.02349169549765109388, -0.02620808279888530226,
    -0.03448966393581323620, -0.03812774396888992529, -0.05263240033584821315,
    -0.05486415897428192912, -0.08877452476680040838, -0.01261484753501346777,
    1.00356872825050946751, -0.01261484753503031193, -0.08877452476679281723,
    -0.05486415897428669614, -0.05263240033584432043, -0.03812774396889240247,
    -0.03448966393581100881, -0.02620808279888764414, -0.02349169549764856813,
    -0.01832242291243483048, -0.01649112537915836327, -0.01310369434291740708,
    -0.01190264418816549055, -0.00960052818708617174, -0.00881837437615880758,
    -0.00720362577421778446, -0.00669413267342735836, -0.00552823600867079299,
    -0.00519546795915030307, -0.00433074047660710320, -0.00411288499378345464,
    -0.00345545877593135715, -0.00331284571947772829, -0.00280161130222301470,
    -0.00270869448954737420, -0.00230285969530739628, -0.00224313077365622315,
    -0.00191361708126515785, -0.00187589512010717446, -0.00160686124447636755,
    -0.00158226727446038416, -0.00135881539184473936, -0.00134564572909785601,
    -0.00115788645226987423, -0.00115224073327792136, -0.00099288457416505543,
    -0.00099237016459540590, -0.00085592507999461337, -0.00085891975554801476,
    -0.00074120024680079542, -0.00074658366829181760, -0.00064435205571094784,
    -0.00065134093406116699, -0.00056205601515879231, -0.00057009787755602219,
    -0.00049173817484126367, -0.00050044145280631915, -0.00043137871260933070,
    -0.00044046553493469183, -0.00037937084585278541, -0.00038864335568060160,
    -0.00033441055096828900, -0.00034372546700017510, -0.00029539153470938310,
    -0.00030470598160636098, -0.00026068439401741235, -0.00026970431005102376,
    -0.00023076411910555691, -0.00023858297765633738, -0.00020366775396491997,
    -0.00021144733901044975, -0.00018011048605068918, -0.00018768220029861783,
    -0.00015950964206965665, -0.00016680726333593294, -0.00014143186724488663,
    -0.00014841748019449227, -0.00012552361433689789, -0.00013217771097567499,
    -0.00011149480231447122, -0.00011781065580081225, -0.00009910600683070414,
    -0.00010508611888905710, -0.00008815897211896660, -0.00009381300436261302,
    -0.00007848989593102117, -0.00008383355250745122, -0.00006996429387099301,
    -0.00007501845211851302, -0.00006247107842627319, -0.00006726077311992514,
    -0.00005591629066486161, -0.00006053146558001904, -0.00004978108057739705,
    -0.00005411064105111847, -0.00004454795915914179, -0.00004813086069638520,
    -0.00003943266482468589, -0.00004280677257856477, -0.00003492107295277574,
    -0.00003808392712035809, -0.00003094066284633193, -0.00003389545048065900,
    -0.00002742414172435651, -0.00003017501508728730, -0.00002431145023493965,
    -0.00002686481719855991, -0.00002155212349960679, -0.00002391661786585488,
    -0.00001910487054809171, -0.00002129105878838215, -0.00001693675311722188,
    -0.00001895702883560177, -0.00001502283369927165, -0.00001689161756547775,
    -0.00001334654683827559, -0.00001508067422280056, -0.00001190082625786406,
    -0.00001351961693711764, -0.00001069770708634584, -0.00001227514374056167,
    -0.00000951231180320429, -0.00001099850081810239, -0.00000858432874199897,
    -0.00000974743477169181, -0.00000755451505353840, -0.00000860841360316040,
    -0.00000663144143354042, -0.00000759496947838709, -0.00000581822564273562,
    -0.00000670136346019077, -0.00000510612699626390, -0.00000591564184057631,
    -0.00000448351321447595, -0.00000522530308401066, -0.00000393932206526943,
    -0.00000461920770117965, -0.00000346416689293377, -0.00000408817430624457,
    -0.00000305075217416854, -0.00000362531450277131, -0.00000269434283683277,
    -0.00000322662206448276, -0.00000239378523369839, -0.00000289217185106983,
    -0.00000215386043867678, -0.00000262789002454381, -0.00000199864660567825,
    -0.00000250084283909178, -0.00000183094344656972, -0.00000234382073002803,
    -0.00000176741808886073, -0.00000217132557281426, -0.00000163127987426894,
    -0.00000200604496179164, -0.00000150193139199939, -0.00000186074944604085,
    -0.00000138886083315537, -0.00000173855867992306, -0.00000129349101569237,
    -0.00000163823566572743,
];
