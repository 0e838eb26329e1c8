//! Kanji allow-lists for the joyo/jinmei rules.
//!
//! Joyo (regular-use) kanji: 2,136 characters. Jinmei (name-use) kanji:
//! 863 characters. The union backs `joyojinmekanji`.

use std::collections::HashSet;
use std::sync::LazyLock;

pub const JOYO: &str = concat!(
    "亜哀挨愛曖悪握圧扱宛嵐安案暗以衣位囲医依委威為畏胃尉異移萎偉椅彙意違維慰遺緯域育一壱逸茨芋引印因咽姻員院淫陰飲隠韻右宇羽",
    "雨唄鬱畝浦運雲永泳英映栄営詠影鋭衛易疫益液駅悦越謁閲円延沿炎怨宴媛援園煙猿遠鉛塩演縁艶汚王凹央応往押旺欧殴桜翁奥横岡屋億",
    "憶臆虞乙俺卸音恩温穏下化火加可仮何花佳価果河苛科架夏家荷華菓貨渦過嫁暇禍靴寡歌箇稼課蚊牙瓦我画芽賀雅餓介回灰会快戒改怪拐",
    "悔海界皆械絵開階塊楷解潰壊懐諧貝外劾害崖涯街慨蓋該概骸垣柿各角拡革格核殻郭覚較隔閣確獲嚇穫学岳楽額顎掛潟括活喝渇割葛滑褐",
    "轄且株釜鎌刈干刊甘汗缶完肝官冠巻看陥乾勘患貫寒喚堪換敢棺款間閑勧寛幹感漢慣管関歓監緩憾還館環簡観韓艦鑑丸含岸岩玩眼頑顔願",
    "企伎危机気岐希忌汽奇祈季紀軌既記起飢鬼帰基寄規亀喜幾揮期棋貴棄毀旗器畿輝機騎技宜偽欺義疑儀戯擬犠議菊吉喫詰却客脚逆虐九久",
    "及弓丘旧休吸朽臼求究泣急級糾宮救球給嗅窮牛去巨居拒拠挙虚許距魚御漁凶共叫狂京享供協況峡挟狭恐恭胸脅強教郷境橋矯鏡競響驚仰",
    "暁業凝曲局極玉巾斤均近金菌勤琴筋僅禁緊錦謹襟吟銀区句苦駆具惧愚空偶遇隅串屈掘窟熊繰君訓勲薫軍郡群兄刑形系径茎係型契計恵啓",
    "掲渓経蛍敬景軽傾携継詣慶憬稽憩警鶏芸迎鯨隙劇撃激桁欠穴血決結傑潔月犬件見券肩建研県倹兼剣拳軒健険圏堅検嫌献絹遣権憲賢謙鍵",
    "繭顕験懸元幻玄言弦限原現舷減源厳己戸古呼固股虎孤弧故枯個庫湖雇誇鼓錮顧五互午呉後娯悟碁語誤護口工公勾孔功巧広甲交光向后好",
    "江考行坑孝抗攻更効幸拘肯侯厚恒洪皇紅荒郊香候校耕航貢降高康控梗黄喉慌港硬絞項溝鉱構綱酵稿興衡鋼講購乞号合拷剛傲豪克告谷刻",
    "国黒穀酷獄骨駒込頃今困昆恨根婚混痕紺魂墾懇左佐沙査砂唆差詐鎖座挫才再災妻采砕宰栽彩採済祭斎細菜最裁債催塞歳載際埼在材剤財",
    "罪崎作削昨柵索策酢搾錯咲冊札刷刹拶殺察撮擦雑皿三山参桟蚕惨産傘散算酸賛残斬暫士子支止氏仕史司四市矢旨死糸至伺志私使刺始姉",
    "枝祉肢姿思指施師恣紙脂視紫詞歯嗣試詩資飼誌雌摯賜諮示字寺次耳自似児事侍治持時滋慈辞磁餌璽鹿式識軸七叱失室疾執湿嫉漆質実芝",
    "写社車舎者射捨赦斜煮遮謝邪蛇尺借酌釈爵若弱寂手主守朱取狩首殊珠酒腫種趣寿受呪授需儒樹収囚州舟秀周宗拾秋臭修袖終羞習週就衆",
    "集愁酬醜蹴襲十汁充住柔重従渋銃獣縦叔祝宿淑粛縮塾熟出述術俊春瞬旬巡盾准殉純循順準潤遵処初所書庶暑署緒諸女如助序叙徐除小升",
    "少召匠床抄肖尚招承昇松沼昭宵将消症祥称笑唱商渉章紹訟勝掌晶焼焦硝粧詔証象傷奨照詳彰障憧衝賞償礁鐘上丈冗条状乗城浄剰常情場",
    "畳蒸縄壌嬢錠譲醸色拭食植殖飾触嘱織職辱尻心申伸臣芯身辛侵信津神唇娠振浸真針深紳進森診寝慎新審震薪親人刃仁尽迅甚陣尋腎須図",
    "水吹垂炊帥粋衰推酔遂睡穂随髄枢崇数据杉裾寸瀬是井世正生成西声制姓征性青斉政星牲省凄逝清盛婿晴勢聖誠精製誓静請整醒税夕斥石",
    "赤昔析席脊隻惜戚責跡積績籍切折拙窃接設雪摂節説舌絶千川仙占先宣専泉浅洗染扇栓旋船戦煎羨腺詮践箋銭潜線遷選薦繊鮮全前善然禅",
    "漸膳繕狙阻祖租素措粗組疎訴塑遡礎双壮早争走奏相荘草送倉捜挿桑巣掃曹曽爽窓創喪痩葬装僧想層総遭槽踪操燥霜騒藻造像増憎蔵贈臓",
    "即束足促則息捉速側測俗族属賊続卒率存村孫尊損遜他多汰打妥唾堕惰駄太対体耐待怠胎退帯泰堆袋逮替貸隊滞態戴大代台第題滝宅択沢",
    "卓拓託濯諾濁但達脱奪棚誰丹旦担単炭胆探淡短嘆端綻誕鍛団男段断弾暖談壇地池知値恥致遅痴稚置緻竹畜逐蓄築秩窒茶着嫡中仲虫沖宙",
    "忠抽注昼柱衷酎鋳駐著貯丁弔庁兆町長挑帳張彫眺釣頂鳥朝貼超腸跳徴嘲潮澄調聴懲直勅捗沈珍朕陳賃鎮追椎墜通痛塚漬坪爪鶴低呈廷弟",
    "定底抵邸亭貞帝訂庭逓停偵堤提程艇締諦泥的笛摘滴適敵溺迭哲鉄徹撤天典店点展添転填田伝殿電斗吐妬徒途都渡塗賭土奴努度怒刀冬灯",
    "当投豆東到逃倒凍唐島桃討透党悼盗陶塔搭棟湯痘登答等筒統稲踏糖頭謄藤闘騰同洞胴動堂童道働銅導瞳峠匿特得督徳篤毒独読栃凸突届",
    "屯豚頓貪鈍曇丼那奈内梨謎鍋南軟難二尼弐匂肉虹日入乳尿任妊忍認寧熱年念捻粘燃悩納能脳農濃把波派破覇馬婆罵拝杯背肺俳配排敗廃",
    "輩売倍梅培陪媒買賠白伯拍泊迫剥舶博薄麦漠縛爆箱箸畑肌八鉢発髪伐抜罰閥反半氾犯帆汎伴判坂阪板版班畔般販斑飯搬煩頒範繁藩晩番",
    "蛮盤比皮妃否批彼披肥非卑飛疲秘被悲扉費碑罷避尾眉美備微鼻膝肘匹必泌筆姫百氷表俵票評漂標苗秒病描猫品浜貧賓頻敏瓶不夫父付布",
    "扶府怖阜附訃負赴浮婦符富普腐敷膚賦譜侮武部舞封風伏服副幅復福腹複覆払沸仏物粉紛雰噴墳憤奮分文聞丙平兵併並柄陛閉塀幣弊蔽餅",
    "米壁璧癖別蔑片辺返変偏遍編弁便勉歩保哺捕補舗母募墓慕暮簿方包芳邦奉宝抱放法泡胞俸倣峰砲崩訪報蜂豊飽褒縫亡乏忙坊妨忘防房肪",
    "某冒剖紡望傍帽棒貿貌暴膨謀頬北木朴牧睦僕墨撲没勃堀本奔翻凡盆麻摩磨魔毎妹枚昧埋幕膜枕又末抹万満慢漫未味魅岬密蜜脈妙民眠矛",
    "務無夢霧娘名命明迷冥盟銘鳴滅免面綿麺茂模毛妄盲耗猛網目黙門紋問冶夜野弥厄役約訳薬躍闇由油喩愉諭輸癒唯友有勇幽悠郵湧猶裕遊",
    "雄誘憂融優与予余誉預幼用羊妖洋要容庸揚揺葉陽溶腰様瘍踊窯養擁謡曜抑沃浴欲翌翼拉裸羅来雷頼絡落酪辣乱卵覧濫藍欄吏利里理痢裏",
    "履璃離陸立律慄略柳流留竜粒隆硫侶旅虜慮了両良料涼猟陵量僚領寮療瞭糧力緑林厘倫輪隣臨瑠涙累塁類令礼冷励戻例鈴零霊隷齢麗暦歴",
    "列劣烈裂恋連廉練錬呂炉賂路露老労弄郎朗浪廊楼漏籠六録麓論和話賄脇惑枠湾腕",
);

pub const JINMEI: &str = concat!(
    "乃卜叉之巳勺也已允云廿壬丑巴勿匁尤禾叶弘乎仔只疋凧汀戊卯伊夷曳亦瓜亥匡旭圭伍亙亘弛此而汝丞庄汐尖托辻凪牟肋收杏佑迂邑伽芥",
    "迄汲灸玖亨劫芹冴吾宏坐孜灼杖辰杜宋佃辿兎沌芭庇甫芙吻牡酉李伶巫芦佛壯吞步每阿苑奄於茄侃函其祁尭欣庚昂杭肴忽昏些竺杵昌帖陀",
    "苔坦宕沓杷枇斧朋孟茅沫怜或侑昊茉苺迪穹來亞兒拔卷拂爭卑社狀娃按郁胤胡廻珂迦俄臥恢恰柑竿祇衿頁彦巷哉珊柘柊洲茸穿茜殆祢姪盃",
    "柏毘姥柾俣籾耶柚宥祐洛亮玲俐勁奎昴洸洵珈珀拜恆侮勉祈祉突者俠卽倭烏峨桧莞桔笈矩桂倦倖晃浩紘紗晒柴栖朔窄砥紐峻隼恕哨秤晋秦",
    "訊屑閃悌啄耽挺釘砧荻套桐莫畠挽豹娩圃峯哩栗浬凌狼晟晏栞莉赳氣乘凉莊祕峽眞晄狹神悔海祐祖祝臭郞俱涉庵惟寅凰晦菅掬袈訣捲牽絃",
    "袴梧皐惚砦笹偲梓悉這雀惇淳渚捷梢菖埴逗釧舵雫梯琢捺紬猪淀兜桶祷萄梶畢彪彬菩捧萌萠逢椛掠琉笠梁菱淋埜崚彗毬晨梛脩笙絆羚眸菫",
    "逞冨圈國淨條將專帶從徠敍晝陷朗祥敏梅巢晚淚萊渥粥瑛堰淵凱堺筈萱雁稀葵卿喬欽寓腔喰戟喧硯絢犀斯惹萩葺竣閏疏湘甥粟厨棲貰揃惣",
    "湊巽湛智筑註喋脹堵董敦琶斐琵葡焚遥裡椋琳禄隈椀惺曾渾琥釉皓翔單堯惠萬惡盜剩搜爲猪都渚琢著視逸黑揭渴焰虛黃葦溢嘩塙鳩禽馴瑚",
    "跨幌嵯蓑裟獅蒔馳嵩楢蒐舜遁楯牒稔瑞靖楚蒼詫楕碓椿禎鼎楠煤蒲楓蒙傭楊蓉溜稜煉蓮碗暉椰滉瑶煌詢頌稟碎圓奧傳祿愼搖與裝虜廊勤暑",
    "煮碑溫窪斡蔭鳶嘉榎樺魁箕厩膏閤瑳榊爾竪嘗摺裳榛槙賑翠碩銑槍漕綜聡暢肇蔦槌綴嶋頗箔蔓緋輔鳳碧蓬鞄綾漣颯漱綺綸槇榮實奬遙僞齊",
    "粹盡寢團壽滯福僧嘆漢禍禎署賓寬綠摑蔣鞍慧蝦駕嬉槻毅誼蕎駈蕨糊撒撰撞諏醇樟蕉鄭噌噂歎蝶樋播幡磐蕃廟撫蕪篇鋒劉諒遼魯凜凛黎熙",
    "諄樂劍澁價儉彈樣稻廣賣醉髮墨層憎穀節練增德緖徵瘦緣謂叡燕薗鴨樫窺橘鋸諺醐縞錫輯錆鞘錘錐樽黛醍薙蹄鮎憐蕗橙澪燎蕾燈龍曉勳縣",
    "戰燒默衞險靜諸器謁橫賴曆歷錄霞檜徽磯鞠檎藁鴻壕薩燦濡鍬駿曙篠燭擢檀瓢瞥輿螺嶺應濕縱彌禪穗戲檢謠繁薰擊鍊襖鎧蹟穣雛叢儲鵜鞭",
    "麿鯉雜櫂燿藝藥藏鎭禮轉壘謹簞蟬醬蟹麒櫛蘇寵鯛禰曝瀕鵬蘭簾櫓獸瀧懷壞類懲贈難瀨禱繡繫顚巌馨纂耀嚴孃騷鰯轟纏飜鷄櫻攝欄蠟饗讃",
    "灘驍鑄聽疊穰臟覽響鷗鷲鱒巖顯纖驗鷹鱗麟鷺釀讓廳",
);

static JOYO_SET: LazyLock<HashSet<char>> = LazyLock::new(|| JOYO.chars().collect());
static JINMEI_SET: LazyLock<HashSet<char>> = LazyLock::new(|| JINMEI.chars().collect());

pub fn is_joyo(c: char) -> bool {
    JOYO_SET.contains(&c)
}

pub fn is_jinmei(c: char) -> bool {
    JINMEI_SET.contains(&c)
}

pub fn is_joyo_or_jinmei(c: char) -> bool {
    JOYO_SET.contains(&c) || JINMEI_SET.contains(&c)
}
